//! Error types for the serde layer.

/// Errors from typed access and snapshots.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying store operation failed.
    #[error("store error: {0}")]
    Store(#[from] treefs_store::Error),

    /// A value could not be serialized into file content.
    #[error("encode error: {message}")]
    Encode { message: String },

    /// File content or a snapshot could not be deserialized.
    #[error("decode error: {message}")]
    Decode { message: String },
}

impl Error {
    pub fn encode(message: impl Into<String>) -> Self {
        Error::Encode {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    /// The store error underneath, if any.
    pub fn store_error(&self) -> Option<&treefs_store::Error> {
        match self {
            Error::Store(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for the serde layer.
pub type Result<T> = std::result::Result<T, Error>;
