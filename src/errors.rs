/*!
 * Error types for the gifscribe application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the transcription service
#[derive(Error, Debug)]
pub enum TranscriptionError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// The service completed the transcript with an error status
    #[error("Transcript finished with error status: {0}")]
    ErrorStatus(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The transcript did not reach a terminal status in time
    #[error("Timed out waiting for transcript {id} after {waited_secs}s")]
    PollTimeout {
        /// Transcript identifier being polled
        id: String,
        /// Seconds spent polling before giving up
        waited_secs: u64,
    },
}

/// Errors that can occur when invoking the external render tool
#[derive(Error, Debug)]
pub enum RenderError {
    /// The tool could not be launched at all
    #[error("Failed to launch {tool}: {message}")]
    Spawn {
        /// Tool binary name
        tool: String,
        /// Underlying launch failure
        message: String,
    },

    /// The tool exited with a non-zero status
    #[error("{operation} failed: {diagnostic}")]
    Tool {
        /// Which render operation was running (burn-in or clip-extract)
        operation: String,
        /// Filtered tool stderr
        diagnostic: String,
    },

    /// The tool ran longer than the renderer allows
    #[error("{operation} timed out after {timeout_secs}s")]
    Timeout {
        /// Which render operation was running
        operation: String,
        /// Configured timeout
        timeout_secs: u64,
    },
}

/// Errors that can occur during subtitle processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The subtitle document could not be parsed
    #[error("Failed to parse subtitle document: {0}")]
    Parse(String),

    /// A timestamp string was not in HH:MM:SS[.mmm] form
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Per-segment failures during clip generation.
///
/// These are never fatal for the run: the orchestrator logs them with the
/// segment ordinal and moves on to the next segment.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// The computed duration for the segment was not positive
    #[error("Segment {seq_num} has non-positive duration {duration}s")]
    Timing {
        /// Ordinal of the offending segment
        seq_num: usize,
        /// The computed (invalid) duration in seconds
        duration: f64,
    },

    /// Clip extraction failed for the segment
    #[error("Segment {seq_num} clip extraction failed: {source}")]
    Render {
        /// Ordinal of the offending segment
        seq_num: usize,
        /// Underlying render failure
        source: RenderError,
    },
}

impl SegmentError {
    /// Ordinal of the segment this error belongs to
    pub fn seq_num(&self) -> usize {
        match self {
            Self::Timing { seq_num, .. } => *seq_num,
            Self::Render { seq_num, .. } => *seq_num,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the transcription service
    #[error("Transcription error: {0}")]
    Transcription(#[from] TranscriptionError),

    /// Error from the render tool
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
