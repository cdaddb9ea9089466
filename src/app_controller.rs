use anyhow::{Result, Context, anyhow};
use log::{warn, info, debug};
use std::path::PathBuf;
use std::sync::Arc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::errors::SegmentError;
use crate::file_utils::FileManager;
use crate::media_renderer::{MediaRenderer, Renderer};
use crate::providers::{SubtitleFormat, TranscriptionProvider};
use crate::providers::assemblyai::AssemblyAI;
use crate::subtitle_processor::{SubtitleCollection, SubtitleEntry};

// @module: Pipeline orchestration

/// One planned clip extraction for a subtitle segment.
///
/// Planning happens before any render call is issued, so the
/// continue-vs-abort decision for bad timing is made structurally rather
/// than inside the render loop.
#[derive(Debug, Clone)]
pub struct ClipJob {
    /// Ordinal of the segment this clip belongs to
    pub seq_num: usize,
    /// Seek offset into the burned-in video, period-decimal HH:MM:SS.mmm
    pub start_offset: String,
    /// Clip length in seconds, guaranteed positive
    pub duration_secs: f64,
    /// Output path, named by the segment ordinal
    pub output: PathBuf,
}

/// Summary of one pipeline run
#[derive(Debug)]
pub struct RunReport {
    /// Segments parsed from the subtitle document
    pub segments: usize,
    /// Clips successfully written
    pub clips_written: usize,
    /// Segments skipped for timing or per-segment render failures
    pub segments_skipped: usize,
}

/// Main application controller for the transcribe-burn-clip pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Transcription service client
    provider: Arc<dyn TranscriptionProvider>,
    // @field: Render tool wrapper
    renderer: Arc<dyn Renderer>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let provider = Arc::new(AssemblyAI::from_config(&config.transcription));
        Ok(Self::with_provider(config, provider))
    }

    /// Create a controller with an explicit transcription provider and the
    /// ffmpeg-backed renderer.
    ///
    /// Tests use this to substitute a mock provider.
    pub fn with_provider(config: Config, provider: Arc<dyn TranscriptionProvider>) -> Self {
        let renderer = Arc::new(MediaRenderer::new(config.render.clone()));
        Self::with_collaborators(config, provider, renderer)
    }

    /// Create a controller with both collaborators supplied explicitly.
    ///
    /// Tests use this to script render failures without a real ffmpeg.
    pub fn with_collaborators(
        config: Config,
        provider: Arc<dyn TranscriptionProvider>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            config,
            provider,
            renderer,
        }
    }

    /// Run the full pipeline: transcribe, persist subtitles, burn in,
    /// and extract one clip per segment.
    ///
    /// Transcription, burn-in, and parse failures are fatal for the run.
    /// Per-segment timing and render failures are logged and skipped.
    /// Artifacts already written stay on disk whatever happens.
    pub async fn run(&self) -> Result<RunReport> {
        let start_time = std::time::Instant::now();

        if !self.config.video_path.exists() {
            return Err(anyhow!("Input video does not exist: {:?}", self.config.video_path));
        }

        // Init: make sure the clips directory is there before any work
        FileManager::ensure_dir(&self.config.clips_dir)?;

        // Transcribing
        info!("Transcribing {:?}", self.config.video_path);
        let transcript = self.provider.transcribe(&self.config.video_path).await
            .context("Transcription request failed")?;

        if transcript.is_error() {
            return Err(anyhow!(
                "Transcription failed for {:?}: {}",
                self.config.video_path,
                transcript.error_message()
            ));
        }

        // FetchingSubtitles
        debug!("Fetching subtitles for transcript {}", transcript.id);
        let subtitle_document = self.provider
            .fetch_subtitles(&transcript.id, SubtitleFormat::Srt)
            .await
            .context("Failed to fetch subtitle document")?;

        FileManager::write_to_file(&self.config.subtitles_path, &subtitle_document)?;
        info!("Saved subtitles to {:?}", self.config.subtitles_path);

        // BurningIn
        info!("Burning subtitles into {:?}", self.config.output_path);
        self.renderer
            .burn_in(
                &self.config.video_path,
                &self.config.subtitles_path,
                &self.config.output_path,
            )
            .await
            .context("Subtitle burn-in failed")?;

        // Parsing
        let entries = SubtitleCollection::parse_srt_string(&subtitle_document)
            .context("Failed to parse subtitle document")?;
        info!("Parsed {} subtitle segments", entries.len());

        // ClipGeneration
        let report = self.generate_clips(&entries).await?;

        info!(
            "Pipeline complete in {}. {} segments, {} clips written, {} skipped.",
            Self::format_duration(start_time.elapsed()),
            report.segments,
            report.clips_written,
            report.segments_skipped
        );

        Ok(report)
    }

    /// Plan one clip per segment, classifying bad timing up front.
    ///
    /// Returns the jobs that are safe to issue plus the segment errors for
    /// the ones that are not. Never issues a render call itself.
    pub fn plan_clips(&self, entries: &[SubtitleEntry]) -> Result<(Vec<ClipJob>, Vec<SegmentError>)> {
        let mut jobs = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for entry in entries {
            let duration_secs = entry.duration_secs()
                .with_context(|| format!("Segment {} has unparseable timestamps", entry.seq_num))?;

            if duration_secs <= 0.0 {
                skipped.push(SegmentError::Timing {
                    seq_num: entry.seq_num,
                    duration: duration_secs,
                });
                continue;
            }

            jobs.push(ClipJob {
                seq_num: entry.seq_num,
                start_offset: entry.start_offset(),
                duration_secs,
                output: self.config.clips_dir.join(format!("gif_{}.gif", entry.seq_num)),
            });
        }

        Ok((jobs, skipped))
    }

    /// Extract clips for every plannable segment, one at a time.
    ///
    /// Clips are cut from the burned-in output video so the subtitle text
    /// appears in each clip.
    async fn generate_clips(&self, entries: &[SubtitleEntry]) -> Result<RunReport> {
        let (jobs, skipped) = self.plan_clips(entries)?;

        for err in &skipped {
            warn!("Skipping segment {}: {}", err.seq_num(), err);
        }

        let progress = ProgressBar::new(jobs.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} clips {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut clips_written = 0;
        let mut segments_skipped = skipped.len();

        for job in &jobs {
            progress.set_message(format!("segment {}", job.seq_num));

            match self.renderer
                .extract_clip(&self.config.output_path, &job.start_offset, job.duration_secs, &job.output)
                .await
            {
                Ok(()) => {
                    debug!("Clip created: {:?}", job.output);
                    clips_written += 1;
                }
                Err(source) => {
                    let err = SegmentError::Render { seq_num: job.seq_num, source };
                    warn!("Skipping segment {}: {}", job.seq_num, err);
                    segments_skipped += 1;
                }
            }

            progress.inc(1);
        }

        progress.finish_and_clear();

        Ok(RunReport {
            segments: entries.len(),
            clips_written,
            segments_skipped,
        })
    }

    /// Delete the run artifacts: clip files first, then the subtitle
    /// document, the source video, and the burned-in output.
    ///
    /// Absence of any target is not an error, so cleanup is idempotent.
    /// Never invoked automatically by `run`.
    pub fn cleanup(&self) -> Result<()> {
        let removed = FileManager::clear_directory(&self.config.clips_dir)?;
        if removed > 0 {
            info!("Cleaned up directory: {:?} ({} files)", self.config.clips_dir, removed);
        }

        for path in [
            &self.config.subtitles_path,
            &self.config.video_path,
            &self.config.output_path,
        ] {
            if FileManager::remove_file_if_present(path)? {
                info!("Deleted file: {:?}", path);
            }
        }

        Ok(())
    }

    /// Format a duration as a human readable string
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:01}s", seconds, duration.subsec_millis() / 100)
        }
    }
}
