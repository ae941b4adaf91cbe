use thiserror::Error;

/// Captured audio plus the container format it was encoded with.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Ogg,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Ogg => "ogg",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wav" => Some(AudioFormat::Wav),
            "ogg" => Some(AudioFormat::Ogg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("no speech started within the listening window")]
    Timeout,

    #[error("audio device unavailable: {0}")]
    Device(String),
}

#[derive(Debug, Clone, Error)]
pub enum RecognizeError {
    #[error("audio could not be decoded as speech")]
    Unintelligible,

    #[error("speech recognition service unreachable")]
    ServiceUnavailable,
}

/// The three-way outcome of a listen attempt. Each kind resolves to a fixed
/// display literal; nothing in the voice path ends the session.
#[derive(Debug, Clone, Error)]
pub enum VoiceError {
    #[error("no speech started within the listening window")]
    Timeout,

    #[error("audio could not be decoded as speech")]
    Unintelligible,

    #[error("speech recognition service unreachable")]
    ServiceUnavailable,
}

impl VoiceError {
    /// The literal shown to the user for this outcome.
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout => "Listening timed out. Please try again.".to_string(),
            Self::Unintelligible => "Sorry, could not understand your voice.".to_string(),
            Self::ServiceUnavailable => "Check your internet connection.".to_string(),
        }
    }
}

impl From<RecognizeError> for VoiceError {
    fn from(err: RecognizeError) -> Self {
        match err {
            RecognizeError::Unintelligible => VoiceError::Unintelligible,
            RecognizeError::ServiceUnavailable => VoiceError::ServiceUnavailable,
        }
    }
}
