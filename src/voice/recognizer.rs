use super::SpeechRecognizer;
use super::types::{AudioClip, RecognizeError};
use crate::config::VoiceConfig;
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct TranscribePayload<'a> {
    audio_base64: String,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscribeReply {
    #[serde(default)]
    text: String,
}

/// Forwards captured audio to a remote speech-recognition service. The
/// recognition algorithm itself lives behind the wire; this client only
/// reproduces the three-way outcome contract.
pub struct RemoteRecognizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RemoteRecognizer {
    pub fn new(config: VoiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.recognition_url,
            api_key: config.api_key,
        }
    }
}

#[async_trait]
impl SpeechRecognizer for RemoteRecognizer {
    async fn recognize(&self, clip: &AudioClip) -> Result<String, RecognizeError> {
        debug!(
            "Forwarding {} bytes of {} audio for recognition",
            clip.bytes.len(),
            clip.format.as_str()
        );

        let payload = TranscribePayload {
            audio_base64: base64::engine::general_purpose::STANDARD.encode(&clip.bytes),
            format: clip.format.as_str(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Recognition request did not reach the service: {}", e);
                RecognizeError::ServiceUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recognition service returned status {}", status.as_u16());
            return Err(RecognizeError::ServiceUnavailable);
        }

        let reply: TranscribeReply = response
            .json()
            .await
            .map_err(|_| RecognizeError::Unintelligible)?;

        let text = reply.text.trim();
        if text.is_empty() {
            return Err(RecognizeError::Unintelligible);
        }

        Ok(text.to_string())
    }
}
