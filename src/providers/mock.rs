/*!
 * Mock transcription provider for testing.
 *
 * This module provides a scripted provider that simulates different
 * service behaviors:
 * - `MockTranscriber::working(srt)` - Completes and serves the given document
 * - `MockTranscriber::error_status(msg)` - Completes with an error status
 * - `MockTranscriber::failing()` - Transport-level failure on every call
 */

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::TranscriptionError;
use crate::providers::{SubtitleFormat, Transcript, TranscriptStatus, TranscriptionProvider};

/// Behavior mode for the mock transcriber
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Transcription completes and subtitle fetches return the scripted document
    Working { subtitle_document: String },
    /// Transcription completes with an error status handle
    ErrorStatus { message: String },
    /// Every call fails at the transport level
    Failing,
}

/// Mock provider for testing pipeline behavior
#[derive(Debug)]
pub struct MockTranscriber {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of transcribe calls issued
    transcribe_calls: Arc<AtomicUsize>,
    /// Number of fetch_subtitles calls issued
    fetch_calls: Arc<AtomicUsize>,
}

impl MockTranscriber {
    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            transcribe_calls: Arc::new(AtomicUsize::new(0)),
            fetch_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock that serves the given subtitle document
    pub fn working(subtitle_document: impl Into<String>) -> Self {
        Self::new(MockBehavior::Working {
            subtitle_document: subtitle_document.into(),
        })
    }

    /// Create a mock whose transcript finishes with an error status
    pub fn error_status(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::ErrorStatus {
            message: message.into(),
        })
    }

    /// Create a mock that fails at the transport level
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of transcribe calls seen so far
    pub fn transcribe_call_count(&self) -> usize {
        self.transcribe_calls.load(Ordering::SeqCst)
    }

    /// Number of fetch_subtitles calls seen so far
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionProvider for MockTranscriber {
    async fn transcribe(&self, _media_path: &Path) -> Result<Transcript, TranscriptionError> {
        self.transcribe_calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working { .. } => Ok(Transcript {
                id: "mock-transcript-1".to_string(),
                status: TranscriptStatus::Completed,
                error: None,
            }),
            MockBehavior::ErrorStatus { message } => Ok(Transcript {
                id: "mock-transcript-1".to_string(),
                status: TranscriptStatus::Error,
                error: Some(message.clone()),
            }),
            MockBehavior::Failing => Err(TranscriptionError::RequestFailed(
                "mock transport failure".to_string(),
            )),
        }
    }

    async fn fetch_subtitles(
        &self,
        _transcript_id: &str,
        _format: SubtitleFormat,
    ) -> Result<String, TranscriptionError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working { subtitle_document } => Ok(subtitle_document.clone()),
            MockBehavior::ErrorStatus { message } => {
                Err(TranscriptionError::ErrorStatus(message.clone()))
            }
            MockBehavior::Failing => Err(TranscriptionError::RequestFailed(
                "mock transport failure".to_string(),
            )),
        }
    }
}
