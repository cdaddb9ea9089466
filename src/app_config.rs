use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents one run's configuration: the fixed artifact paths plus the
/// transcription and render settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source video file
    #[serde(default = "default_video_path")]
    pub video_path: PathBuf,

    /// Where the fetched subtitle document is persisted
    #[serde(default = "default_subtitles_path")]
    pub subtitles_path: PathBuf,

    /// Burned-in output video
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Directory receiving one clip per subtitle segment
    #[serde(default = "default_clips_dir")]
    pub clips_dir: PathBuf,

    /// Transcription service settings
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Render tool settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Transcription service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranscriptionConfig {
    /// Service endpoint URL
    #[serde(default = "default_transcription_endpoint")]
    pub endpoint: String,

    /// API key; may be left empty and supplied via the
    /// ASSEMBLYAI_API_KEY environment variable instead
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Seconds between transcript status polls
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Maximum seconds to wait for a transcript to reach a terminal status
    #[serde(default = "default_transcription_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_transcription_endpoint(),
            api_key: String::new(),
            poll_interval_secs: default_poll_interval_secs(),
            timeout_secs: default_transcription_timeout_secs(),
        }
    }
}

impl TranscriptionConfig {
    /// API key from the config file, falling back to the environment
    pub fn resolve_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }
        std::env::var("ASSEMBLYAI_API_KEY").unwrap_or_default()
    }
}

/// Render tool configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RenderConfig {
    /// Clip frame rate after downsampling
    #[serde(default = "default_clip_fps")]
    pub clip_fps: u32,

    /// Clip width in pixels; height scales to preserve aspect ratio
    #[serde(default = "default_clip_width")]
    pub clip_width: u32,

    /// Timeout in seconds for a single ffmpeg invocation
    #[serde(default = "default_render_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clip_fps: default_clip_fps(),
            clip_width: default_clip_width(),
            timeout_secs: default_render_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_video_path() -> PathBuf {
    PathBuf::from("video.mp4")
}

fn default_subtitles_path() -> PathBuf {
    PathBuf::from("subtitles.srt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("outputvideo.mp4")
}

fn default_clips_dir() -> PathBuf {
    PathBuf::from("gifs")
}

fn default_transcription_endpoint() -> String {
    "https://api.assemblyai.com".to_string()
}

fn default_poll_interval_secs() -> u64 {
    3
}

fn default_transcription_timeout_secs() -> u64 {
    600
}

fn default_clip_fps() -> u32 {
    10
}

fn default_clip_width() -> u32 {
    320
}

fn default_render_timeout_secs() -> u64 {
    300
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.transcription.resolve_api_key().is_empty() {
            return Err(anyhow!(
                "Transcription API key is required (set transcription.api_key or ASSEMBLYAI_API_KEY)"
            ));
        }

        if self.transcription.poll_interval_secs == 0 {
            return Err(anyhow!("transcription.poll_interval_secs must be greater than zero"));
        }

        if self.render.clip_fps == 0 {
            return Err(anyhow!("render.clip_fps must be greater than zero"));
        }

        if self.render.clip_width == 0 {
            return Err(anyhow!("render.clip_width must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            video_path: default_video_path(),
            subtitles_path: default_subtitles_path(),
            output_path: default_output_path(),
            clips_dir: default_clips_dir(),
            transcription: TranscriptionConfig::default(),
            render: RenderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
