/*!
 * Tests for application configuration
 */

use std::path::PathBuf;
use gifscribe::app_config::{Config, LogLevel};

#[test]
fn test_default_config_shouldUseOriginalArtifactPaths() {
    let config = Config::default();

    assert_eq!(config.video_path, PathBuf::from("video.mp4"));
    assert_eq!(config.subtitles_path, PathBuf::from("subtitles.srt"));
    assert_eq!(config.output_path, PathBuf::from("outputvideo.mp4"));
    assert_eq!(config.clips_dir, PathBuf::from("gifs"));
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_default_config_shouldUseOriginalRenderParameters() {
    let config = Config::default();

    assert_eq!(config.render.clip_fps, 10);
    assert_eq!(config.render.clip_width, 320);
}

#[test]
fn test_config_jsonRoundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.transcription.api_key = "secret".to_string();
    config.render.clip_fps = 15;
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.transcription.api_key, "secret");
    assert_eq!(restored.render.clip_fps, 15);
    assert_eq!(restored.log_level, LogLevel::Debug);
    assert_eq!(restored.video_path, config.video_path);
}

#[test]
fn test_config_deserialize_withMissingFields_shouldApplyDefaults() {
    let restored: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(restored.video_path, PathBuf::from("video.mp4"));
    assert_eq!(restored.transcription.endpoint, "https://api.assemblyai.com");
    assert_eq!(restored.transcription.poll_interval_secs, 3);
    assert_eq!(restored.render.clip_width, 320);
}

#[test]
fn test_validate_withApiKey_shouldSucceed() {
    let mut config = Config::default();
    config.transcription.api_key = "secret".to_string();

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withZeroFps_shouldFail() {
    let mut config = Config::default();
    config.transcription.api_key = "secret".to_string();
    config.render.clip_fps = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroClipWidth_shouldFail() {
    let mut config = Config::default();
    config.transcription.api_key = "secret".to_string();
    config.render.clip_width = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroPollInterval_shouldFail() {
    let mut config = Config::default();
    config.transcription.api_key = "secret".to_string();
    config.transcription.poll_interval_secs = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_resolveApiKey_withConfigValue_shouldPreferConfig() {
    let mut config = Config::default();
    config.transcription.api_key = "from-config".to_string();

    assert_eq!(config.transcription.resolve_api_key(), "from-config");
}
