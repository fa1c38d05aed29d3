use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or invalid API key")]
    InvalidApiKey,

    #[error("PEXELS_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid base URL")]
    InvalidBaseUrl,

    #[error("Failed to send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("HTTP error {status}: {message}")]
    Status { status: StatusCode, message: String },
}
