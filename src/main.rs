use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waza_audio::domain::audio::{AudioGenerationService, AudioGenerationServiceApi};
use waza_audio::domain::technique;
use waza_audio::infrastructure::config::{Config, LogFormat};
use waza_audio::infrastructure::repositories::ElevenLabsTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        preset = %config.preset,
        voice_id = config.preset.voice_id,
        output_dir = %config.output_dir.display(),
        "Starting technique audio generation"
    );

    let tts_repo = Arc::new(ElevenLabsTtsRepository::new(
        config.api_key.clone(),
        config.base_url.clone(),
    ));
    let service = AudioGenerationService::new(tts_repo, config.voice_config());

    let entries = technique::for_language(config.preset.language);

    let report = service.generate(&entries).await.map_err(|e| {
        tracing::error!(error = %e, "Audio generation aborted");
        e
    })?;

    tracing::info!(
        file_count = report.files.len(),
        total_bytes = report.total_bytes(),
        "All technique audio generated"
    );

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waza_audio=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
