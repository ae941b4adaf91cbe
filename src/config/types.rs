use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub inference: InferenceConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the hosted inference API, without the `/models/...` path.
    pub base_url: String,
    /// Model identifier appended to the endpoint path.
    pub model: String,
    /// Bearer token. Overridden by `HUGGINGFACE_API_KEY` when set; an empty
    /// key is sent as-is and surfaces as an authorization failure upstream.
    #[serde(default)]
    pub api_key: String,
    /// Optional pause after each call, a UX pacing device only.
    #[serde(default)]
    pub pacing_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Endpoint of the remote speech-recognition service. An unreachable or
    /// unset endpoint surfaces as the connectivity fallback, never a crash.
    #[serde(default)]
    pub recognition_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            recognition_url: String::new(),
            api_key: String::new(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
