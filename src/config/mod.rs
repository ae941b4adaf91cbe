mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Environment variable holding the hosted-inference bearer token.
pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // The credential is read once at startup. Absence is not validated here;
    // it surfaces as an authorization failure from the remote endpoint.
    if let Ok(key) = env::var(API_KEY_ENV) {
        config.inference.api_key = key;
    }

    Ok(config)
}
