/// Error types for OMML serialization.
use thiserror::Error;

/// Errors that can occur while writing OMML
#[derive(Error, Debug)]
pub enum OmmlWriteError {
    /// Formatting into the output buffer failed
    #[error("OMML formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}
