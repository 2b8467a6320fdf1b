use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use tokio::sync::Mutex;

pub const TEST_API_KEY: &str = "test-elevenlabs-key";
pub const TEST_VOICE_ID: &str = "12CHcREbuPdJY02VY7zT";

pub fn speech_path(voice_id: &str) -> String {
    format!("/v1/text-to-speech/{}", voice_id)
}

/// Minimal MP3 frame header followed by a tag so files can be told apart
pub fn mock_audio_bytes(tag: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFB, 0x90, 0x00];
    bytes.extend_from_slice(tag.as_bytes());
    bytes
}

/// Answer a synthesis request for `text` with `audio`
pub async fn mock_speech(server: &Mutex<ServerGuard>, text: &str, audio: Vec<u8>) -> Mock {
    let mut server = server.lock().await;
    server
        .mock("POST", speech_path(TEST_VOICE_ID).as_str())
        .match_header("xi-api-key", TEST_API_KEY)
        .match_body(Matcher::PartialJson(json!({ "text": text })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(audio)
        .create_async()
        .await
}

/// Reject a synthesis request for `text` with the given status and body
pub async fn mock_rejection(
    server: &Mutex<ServerGuard>,
    text: &str,
    status: usize,
    body: &str,
) -> Mock {
    let mut server = server.lock().await;
    server
        .mock("POST", speech_path(TEST_VOICE_ID).as_str())
        .match_body(Matcher::PartialJson(json!({ "text": text })))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

pub const UNAUTHORIZED_BODY: &str =
    r#"{"detail":{"status":"invalid_api_key","message":"Invalid API key"}}"#;

/// Synthesis request for `text` that the run must never reach
pub async fn mock_speech_unreached(server: &Mutex<ServerGuard>, text: &str) -> Mock {
    let mut server = server.lock().await;
    server
        .mock("POST", speech_path(TEST_VOICE_ID).as_str())
        .match_body(Matcher::PartialJson(json!({ "text": text })))
        .with_status(200)
        .with_body(mock_audio_bytes("unreached"))
        .expect(0)
        .create_async()
        .await
}
