// In crates/ledger/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Division by zero: BUY at a zero exchange rate")]
    DivisionByZero,

    #[error("Ledger store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ledger store row encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
