// End-to-end tests for the technique audio generator
//
// Each test gets its own mockito server standing in for the ElevenLabs API and
// its own scratch output directory, both created through test-context
// lifecycle hooks. Nothing here talks to the real API.

mod helpers;
mod test_config;
