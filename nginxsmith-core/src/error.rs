//! Error types for Nginxsmith

use thiserror::Error;

/// Result type for Nginxsmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Nginxsmith
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}
