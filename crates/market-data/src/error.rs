// In crates/market-data/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),

    #[error("Quote provider error: {msg}")]
    ApiError { msg: String },

    #[error("Malformed quote payload: {0}")]
    MalformedPayload(String),

    #[error("History store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("History store row encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
