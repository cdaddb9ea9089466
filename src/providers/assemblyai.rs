use std::path::Path;
use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use reqwest::Client;
use log::{error, debug};

use crate::app_config::TranscriptionConfig;
use crate::errors::TranscriptionError;
use crate::providers::{SubtitleFormat, Transcript, TranscriptionProvider};

/// AssemblyAI client for interacting with the AssemblyAI API
#[derive(Debug)]
pub struct AssemblyAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Delay between transcript status polls
    poll_interval: Duration,
    /// Maximum seconds to wait for a terminal transcript status
    timeout_secs: u64,
}

/// Transcript creation request
#[derive(Debug, Serialize)]
struct CreateTranscriptRequest {
    /// URL of the uploaded media to transcribe
    audio_url: String,
}

/// Upload endpoint response
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// Service-hosted URL of the uploaded media
    upload_url: String,
}

impl AssemblyAI {
    /// Create a new AssemblyAI client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        poll_interval_secs: u64,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(300))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            poll_interval: Duration::from_secs(poll_interval_secs),
            timeout_secs,
        }
    }

    /// Create a client from the transcription configuration
    pub fn from_config(config: &TranscriptionConfig) -> Self {
        Self::new(
            config.resolve_api_key(),
            config.endpoint.clone(),
            config.poll_interval_secs,
            config.timeout_secs,
        )
    }

    /// Absolute URL for an API path
    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Map a non-success HTTP response to a typed error
    async fn response_error(response: reqwest::Response) -> TranscriptionError {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        error!("AssemblyAI API error ({}): {}", status, message);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return TranscriptionError::AuthenticationError(message);
        }

        TranscriptionError::ApiError {
            status_code: status.as_u16(),
            message,
        }
    }

    /// Upload a local media file, returning its service-hosted URL
    async fn upload(&self, media_path: &Path) -> Result<String, TranscriptionError> {
        let bytes = tokio::fs::read(media_path)
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!(
                "Failed to read media file {:?}: {}",
                media_path, e
            )))?;

        debug!("Uploading {} bytes from {:?}", bytes.len(), media_path);

        let response = self.client.post(self.api_url("v2/upload"))
            .header("authorization", &self.api_key)
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!(
                "Failed to upload media to AssemblyAI: {}", e
            )))?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }

        let upload = response.json::<UploadResponse>().await
            .map_err(|e| TranscriptionError::ParseError(format!(
                "Failed to parse upload response: {}", e
            )))?;

        Ok(upload.upload_url)
    }

    /// Create a transcription job for an uploaded media URL
    async fn create_transcript(&self, audio_url: String) -> Result<Transcript, TranscriptionError> {
        let request = CreateTranscriptRequest { audio_url };

        let response = self.client.post(self.api_url("v2/transcript"))
            .header("authorization", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!(
                "Failed to create transcript: {}", e
            )))?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }

        response.json::<Transcript>().await
            .map_err(|e| TranscriptionError::ParseError(format!(
                "Failed to parse transcript response: {}", e
            )))
    }

    /// Fetch the current state of a transcript
    async fn get_transcript(&self, id: &str) -> Result<Transcript, TranscriptionError> {
        let response = self.client.get(self.api_url(&format!("v2/transcript/{}", id)))
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!(
                "Failed to poll transcript {}: {}", id, e
            )))?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }

        response.json::<Transcript>().await
            .map_err(|e| TranscriptionError::ParseError(format!(
                "Failed to parse transcript response: {}", e
            )))
    }

    /// Poll a transcript until it reaches a terminal status
    async fn wait_for_terminal(&self, mut transcript: Transcript) -> Result<Transcript, TranscriptionError> {
        let started = std::time::Instant::now();

        while !transcript.status.is_terminal() {
            if started.elapsed().as_secs() >= self.timeout_secs {
                return Err(TranscriptionError::PollTimeout {
                    id: transcript.id,
                    waited_secs: self.timeout_secs,
                });
            }

            tokio::time::sleep(self.poll_interval).await;
            debug!("Polling transcript {} ({:?})", transcript.id, transcript.status);
            transcript = self.get_transcript(&transcript.id).await?;
        }

        Ok(transcript)
    }
}

#[async_trait]
impl TranscriptionProvider for AssemblyAI {
    async fn transcribe(&self, media_path: &Path) -> Result<Transcript, TranscriptionError> {
        let audio_url = self.upload(media_path).await?;
        let transcript = self.create_transcript(audio_url).await?;
        self.wait_for_terminal(transcript).await
    }

    async fn fetch_subtitles(
        &self,
        transcript_id: &str,
        format: SubtitleFormat,
    ) -> Result<String, TranscriptionError> {
        let url = self.api_url(&format!("v2/transcript/{}/{}", transcript_id, format.as_str()));

        let response = self.client.get(url)
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!(
                "Failed to fetch subtitles for transcript {}: {}", transcript_id, e
            )))?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }

        response.text().await
            .map_err(|e| TranscriptionError::ParseError(format!(
                "Failed to read subtitle document: {}", e
            )))
    }
}
