use async_trait::async_trait;
use medibot::inference::{InferenceClient, InferenceError};
use medibot::voice::{
    AudioClip, AudioFormat, AudioSource, CaptureError, RecognizeError, SpeechRecognizer,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Inference client that replays scripted outcomes in order, recording every
/// prompt it receives.
pub struct ScriptedInferenceClient {
    outcomes: Arc<Mutex<Vec<Result<String, InferenceError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedInferenceClient {
    pub fn new(outcomes: Vec<Result<String, InferenceError>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the prompt log, usable after the client is boxed away.
    pub fn prompt_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl InferenceClient for ScriptedInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(InferenceError::Network(
                "no more scripted outcomes".to_string(),
            ));
        }
        outcomes.remove(0)
    }
}

/// Inference client that always answers with the same text.
pub struct FixedReplyClient {
    reply: String,
}

impl FixedReplyClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl InferenceClient for FixedReplyClient {
    async fn generate(&self, _prompt: &str) -> Result<String, InferenceError> {
        Ok(self.reply.clone())
    }
}

/// Audio source with a canned outcome, recording the wait it was given.
pub struct CannedSource {
    outcome: Result<AudioClip, CaptureError>,
    observed_wait: Arc<Mutex<Option<Duration>>>,
}

impl CannedSource {
    pub fn clip(bytes: &[u8]) -> Self {
        Self {
            outcome: Ok(AudioClip {
                bytes: bytes.to_vec(),
                format: AudioFormat::Wav,
            }),
            observed_wait: Arc::new(Mutex::new(None)),
        }
    }

    pub fn timing_out() -> Self {
        Self {
            outcome: Err(CaptureError::Timeout),
            observed_wait: Arc::new(Mutex::new(None)),
        }
    }

    pub fn device_failure(reason: &str) -> Self {
        Self {
            outcome: Err(CaptureError::Device(reason.to_string())),
            observed_wait: Arc::new(Mutex::new(None)),
        }
    }

    /// Handle to the recorded wait, usable after the source is moved away.
    pub fn observed_wait(&self) -> Arc<Mutex<Option<Duration>>> {
        Arc::clone(&self.observed_wait)
    }
}

#[async_trait]
impl AudioSource for CannedSource {
    async fn capture(&self, max_wait: Duration) -> Result<AudioClip, CaptureError> {
        *self.observed_wait.lock().unwrap() = Some(max_wait);
        self.outcome.clone()
    }
}

/// Recognizer with a canned outcome.
pub struct CannedRecognizer {
    outcome: Result<String, RecognizeError>,
}

impl CannedRecognizer {
    pub fn transcribing(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
        }
    }

    pub fn unintelligible() -> Self {
        Self {
            outcome: Err(RecognizeError::Unintelligible),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            outcome: Err(RecognizeError::ServiceUnavailable),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for CannedRecognizer {
    async fn recognize(&self, _clip: &AudioClip) -> Result<String, RecognizeError> {
        self.outcome.clone()
    }
}
