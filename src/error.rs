//! Error types for folio operations.
//!
//! The core pipeline functions are total: sanitization, conversion, and
//! pagination always produce a defined result. Errors arise only at the I/O
//! surfaces around them.

use thiserror::Error;

/// Errors from the I/O surfaces (CLI, file handling).
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("invalid block description: {0}")]
    BlockDescription(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
