use mockito::{Server, ServerGuard};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::Mutex;
use uuid::Uuid;
use waza_audio::domain::audio::AudioGenerationService;
use waza_audio::domain::voice::VoiceConfig;
use waza_audio::infrastructure::repositories::ElevenLabsTtsRepository;

pub mod elevenlabs_mocks;

use elevenlabs_mocks::{TEST_API_KEY, TEST_VOICE_ID};

pub struct TestContext {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
    pub output_dir: PathBuf,
    scratch_root: PathBuf,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let server = Server::new_async().await;
            let base_url = server.url();

            // Nested so the pipeline has to create intermediate directories
            let scratch_root = std::env::temp_dir().join(format!("waza-audio-e2e-{}", Uuid::new_v4()));
            let output_dir = scratch_root.join("French").join("Female3");

            Self {
                server: Arc::new(Mutex::new(server)),
                base_url,
                output_dir,
                scratch_root,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async move {
            let _ = tokio::fs::remove_dir_all(&self.scratch_root).await;
        }
    }
}

impl TestContext {
    pub fn repository(&self) -> ElevenLabsTtsRepository {
        ElevenLabsTtsRepository::new(TEST_API_KEY.to_string(), self.base_url.clone())
    }

    pub fn voice(&self) -> VoiceConfig {
        VoiceConfig::new(TEST_VOICE_ID, self.output_dir.clone())
    }

    /// Generation service wired to the mock server, the way main wires it to ElevenLabs
    pub fn service(&self) -> AudioGenerationService {
        AudioGenerationService::new(Arc::new(self.repository()), self.voice())
    }

    pub fn written_files(&self) -> Vec<String> {
        list_files(&self.output_dir)
    }
}

pub fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
