use std::fmt::Debug;
use std::path::Path;
use async_trait::async_trait;
use log::{error, debug};
use tokio::process::Command;
use crate::app_config::RenderConfig;
use crate::errors::RenderError;

// @module: ffmpeg wrapper for burn-in and clip extraction

/// Common trait for render tool wrappers.
///
/// Both operations run to completion and surface a [`RenderError`] on
/// failure. A failed run may leave a truncated output file behind; callers
/// must not rely on it. The orchestrator depends on this trait so tests can
/// substitute a scripted renderer, the same way transcription providers are
/// injected.
#[async_trait]
pub trait Renderer: Send + Sync + Debug {
    /// Burn a subtitle file into a video, producing a new video file
    async fn burn_in(
        &self,
        video_in: &Path,
        subtitles: &Path,
        video_out: &Path,
    ) -> Result<(), RenderError>;

    /// Extract a short downsampled animated clip from a video.
    ///
    /// `start_offset` is a period-decimal `HH:MM:SS.mmm` seek position.
    /// Callers guarantee `duration_secs > 0`; a non-positive duration is a
    /// segment timing error upstream and this call must not be issued.
    async fn extract_clip(
        &self,
        video_in: &Path,
        start_offset: &str,
        duration_secs: f64,
        clip_out: &Path,
    ) -> Result<(), RenderError>;
}

/// Renderer backed by the external ffmpeg tool
#[derive(Debug)]
pub struct MediaRenderer {
    config: RenderConfig,
}

impl MediaRenderer {
    /// Create a new renderer with the given settings
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Run ffmpeg with the given arguments, waiting for completion.
    ///
    /// The child is killed if the timeout drops the output future, so a
    /// hung ffmpeg does not keep writing after the renderer has given up.
    async fn run_ffmpeg(&self, operation: &str, args: Vec<String>) -> Result<(), RenderError> {
        debug!("Running ffmpeg {}: {:?}", operation, args);

        let ffmpeg_future = Command::new("ffmpeg")
            .args(&args)
            .kill_on_drop(true)
            .output();

        let timeout_duration = std::time::Duration::from_secs(self.config.timeout_secs);
        let result = tokio::select! {
            result = ffmpeg_future => {
                result.map_err(|e| RenderError::Spawn {
                    tool: "ffmpeg".to_string(),
                    message: e.to_string(),
                })?
            },
            _ = tokio::time::sleep(timeout_duration) => {
                return Err(RenderError::Timeout {
                    operation: operation.to_string(),
                    timeout_secs: self.config.timeout_secs,
                });
            }
        };

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let filtered = Self::filter_ffmpeg_stderr(&stderr);
            error!("ffmpeg {} failed: {}", operation, filtered);
            return Err(RenderError::Tool {
                operation: operation.to_string(),
                diagnostic: filtered,
            });
        }

        Ok(())
    }

    /// Filter ffmpeg stderr to only show meaningful error lines, stripping the
    /// version banner, build configuration, and stream metadata noise.
    ///
    /// Prefixes are matched against the raw line, indentation included.
    pub fn filter_ffmpeg_stderr(stderr: &str) -> String {
        let dominated_prefixes = [
            "ffmpeg version",
            "  built with",
            "  configuration:",
            "  lib",
            "Input #",
            "  Metadata:",
            "  Duration:",
            "  Chapter",
            "    Chapter",
            "  Stream #",
            "      Metadata:",
            "        title",
            "        BPS",
            "        DURATION",
            "        NUMBER_OF",
            "        _STATISTICS",
            "Output #",
            "Stream mapping:",
            "Press [q]",
        ];

        let meaningful: Vec<&str> = stderr
            .lines()
            .filter(|line| {
                if line.trim().is_empty() {
                    return false;
                }
                !dominated_prefixes.iter().any(|p| line.starts_with(p))
            })
            .collect();

        if meaningful.is_empty() {
            "unknown ffmpeg error (stderr was empty after filtering)".to_string()
        } else {
            meaningful.join("\n")
        }
    }
}

#[async_trait]
impl Renderer for MediaRenderer {
    async fn burn_in(
        &self,
        video_in: &Path,
        subtitles: &Path,
        video_out: &Path,
    ) -> Result<(), RenderError> {
        let subtitles_filter = format!(
            "subtitles={}",
            subtitles.to_str().unwrap_or_default()
        );

        let args = vec![
            "-y".to_string(),
            "-i".to_string(),
            video_in.to_str().unwrap_or_default().to_string(),
            "-vf".to_string(),
            subtitles_filter,
            video_out.to_str().unwrap_or_default().to_string(),
        ];

        self.run_ffmpeg("burn-in", args).await
    }

    async fn extract_clip(
        &self,
        video_in: &Path,
        start_offset: &str,
        duration_secs: f64,
        clip_out: &Path,
    ) -> Result<(), RenderError> {
        debug_assert!(duration_secs > 0.0, "clip duration must be positive");

        let downsample_filter = format!(
            "fps={},scale={}:-1:flags=lanczos",
            self.config.clip_fps, self.config.clip_width
        );

        let args = vec![
            "-y".to_string(),
            "-ss".to_string(),
            start_offset.to_string(),
            "-t".to_string(),
            format!("{}", duration_secs),
            "-i".to_string(),
            video_in.to_str().unwrap_or_default().to_string(),
            "-vf".to_string(),
            downsample_filter,
            clip_out.to_str().unwrap_or_default().to_string(),
        ];

        self.run_ffmpeg("clip-extract", args).await
    }
}
