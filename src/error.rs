//! Error types for the dictrie library.
//!
//! Lookups against a built dictionary never fail; errors only come from the
//! surrounding layer that reads word lists and configuration. All of them are
//! represented by the [`DictrieError`] enum.
//!
//! # Examples
//!
//! ```
//! use dictrie::error::{DictrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DictrieError::config("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for dictrie operations.
#[derive(Error, Debug)]
pub enum DictrieError {
    /// I/O errors (reading word lists, config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (out-of-range thresholds, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DictrieError.
pub type Result<T> = std::result::Result<T, DictrieError>;

impl DictrieError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DictrieError::Config(msg.into())
    }
}
