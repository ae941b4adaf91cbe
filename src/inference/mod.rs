mod client;
mod types;

pub use client::{HostedModelClient, InferenceClient};
pub use types::{InferenceError, InferencePayload};
