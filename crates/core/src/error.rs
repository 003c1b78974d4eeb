//! Error types for building and writing slide decks.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling, writing or re-reading a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create, write or rename the output file.
    #[error("Failed to write file")]
    IoError(#[from] std::io::Error),

    /// The deck cannot be serialized as-is (for example, it has no slides).
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// Failed to format part content.
    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML parsing error (for PPTX).
    #[error("XML parsing error: {0}")]
    XmlError(String),

    /// A re-read package does not match what was written.
    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}
