mod recognizer;
mod types;

pub use recognizer::RemoteRecognizer;
pub use types::{AudioClip, AudioFormat, CaptureError, RecognizeError, VoiceError};

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

/// How long [`VoiceInput::listen`] waits for speech to start before giving
/// up.
pub const LISTEN_WINDOW: Duration = Duration::from_secs(5);

/// A source of captured utterances, usually a microphone. Implementations
/// must release the audio device handle on every exit path, including
/// timeout and failure.
#[async_trait]
pub trait AudioSource: Send + Sync {
    /// Captures one utterance, waiting at most `max_wait` for speech to
    /// start.
    async fn capture(&self, max_wait: Duration) -> Result<AudioClip, CaptureError>;
}

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, clip: &AudioClip) -> Result<String, RecognizeError>;
}

/// Microphone-to-text pipeline: capture one utterance within a bounded
/// window, hand it to the recognition service, surface a three-way outcome.
pub struct VoiceInput<S, R> {
    source: S,
    recognizer: R,
    window: Duration,
}

impl<S: AudioSource, R: SpeechRecognizer> VoiceInput<S, R> {
    pub fn new(source: S, recognizer: R) -> Self {
        Self {
            source,
            recognizer,
            window: LISTEN_WINDOW,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub async fn listen(&self) -> Result<String, VoiceError> {
        info!("Listening for speech");

        let clip = match self.source.capture(self.window).await {
            Ok(clip) => clip,
            Err(CaptureError::Timeout) => {
                warn!("No speech within the listening window");
                return Err(VoiceError::Timeout);
            }
            Err(CaptureError::Device(e)) => {
                warn!("Audio capture failed: {}", e);
                return Err(VoiceError::ServiceUnavailable);
            }
        };

        self.recognizer
            .recognize(&clip)
            .await
            .map_err(VoiceError::from)
    }
}
