// In crates/indicators/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input series: {0}")]
    InvalidInput(&'static str),

    #[error("Not enough history: need {needed} samples, have {len}")]
    InsufficientHistory { needed: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
