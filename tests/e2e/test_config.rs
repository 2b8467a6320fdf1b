use serial_test::serial;
use std::env;
use std::path::PathBuf;
use waza_audio::domain::voice::Language;
use waza_audio::infrastructure::config::{Config, ConfigError};

const VARS: &[&str] = &[
    "ELEVENLABS_API_KEY",
    "VOICE_PRESET",
    "AUDIO_OUTPUT_ROOT",
    "AUDIO_OUTPUT_DIR",
    "ELEVENLABS_MODEL_ID",
    "ELEVENLABS_BASE_URL",
    "VOICE_STABILITY",
    "VOICE_SIMILARITY_BOOST",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn it_should_load_config_from_environment() {
    clear_env();
    env::set_var("ELEVENLABS_API_KEY", "env-key");
    env::set_var("VOICE_PRESET", "ja-f2");
    env::set_var("AUDIO_OUTPUT_ROOT", "/data/audio");
    env::set_var("VOICE_STABILITY", "0.5");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.preset.language, Language::Japanese);
    assert_eq!(config.preset.voice_id, "GxhGYQesaQaYKePCZDEC");
    assert_eq!(config.output_dir, PathBuf::from("/data/audio/Japanese/Female2"));
    assert_eq!(config.voice_settings.stability, 0.5);
    assert_eq!(config.voice_settings.similarity_boost, 0.8);
}

#[test]
#[serial]
fn it_should_refuse_to_start_without_api_key() {
    clear_env();

    let result = Config::from_env();

    assert!(matches!(result, Err(ConfigError::Missing("ELEVENLABS_API_KEY"))));
}
