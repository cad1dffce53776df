use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}: {1}")]
    Response(reqwest::StatusCode, String),

    // Displays as the bare server message so callers can match on its text
    #[error("{0}")]
    Rejected(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
