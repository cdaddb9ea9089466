/*!
 * Provider implementations for speech-to-text services.
 *
 * This module contains the transcription client contract and its
 * implementations:
 * - AssemblyAI: remote transcription API
 * - Mock: scripted provider for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Debug;
use std::path::Path;

use crate::errors::TranscriptionError;

/// Terminal and in-flight states of a remote transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptStatus {
    /// Accepted, waiting to be processed
    Queued,
    /// Being processed by the service
    Processing,
    /// Finished successfully
    Completed,
    /// Finished with a service-side error
    Error,
}

impl TranscriptStatus {
    /// Whether the service will make no further progress on this transcript
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

/// Handle to a remote transcript.
///
/// Owned transiently by the orchestrator; the `id` is what subtitle
/// retrieval is keyed on.
#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    /// Service-assigned transcript identifier
    pub id: String,
    /// Current status
    pub status: TranscriptStatus,
    /// Error message when status is `Error`
    #[serde(default)]
    pub error: Option<String>,
}

impl Transcript {
    /// Whether the service reported this transcript as failed
    pub fn is_error(&self) -> bool {
        self.status == TranscriptStatus::Error
    }

    /// The service-reported error message, if any
    pub fn error_message(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| "transcription failed with no error message".to_string())
    }
}

/// Subtitle document format to request from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// SubRip text format (comma-decimal timestamps)
    Srt,
}

impl SubtitleFormat {
    /// The format identifier used in the service URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Common trait for transcription service clients
///
/// Both operations block (from the caller's perspective) until the service
/// has a complete answer; there is no partial or streaming contract.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync + Debug {
    /// Submit a local media file for transcription and wait for a terminal
    /// status.
    ///
    /// A service-side failure is surfaced as a `Transcript` with error
    /// status rather than an `Err`, so the caller can inspect the handle;
    /// transport failures are `Err`.
    async fn transcribe(&self, media_path: &Path) -> Result<Transcript, TranscriptionError>;

    /// Fetch the rendered subtitle document for a completed transcript
    async fn fetch_subtitles(
        &self,
        transcript_id: &str,
        format: SubtitleFormat,
    ) -> Result<String, TranscriptionError>;
}

pub mod assemblyai;
pub mod mock;
