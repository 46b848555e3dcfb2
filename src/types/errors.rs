//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. None of
//! these are ever raised back into the engine's callback stack; they surface
//! only from configuration, attachment and dynamic callback lookup.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the event bridge.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// A callback name that the engine listener surface does not declare.
    #[error("unknown callback: {0}")]
    UnknownCallback(String),

    /// The engine rejected the listener (invalid or shut down handle).
    #[error("engine error: {0}")]
    Engine(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_callback(name: impl Into<String>) -> Self {
        Self::UnknownCallback(name.into())
    }

    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::validation("source cannot be empty").to_string(),
            "validation error: source cannot be empty"
        );
        assert_eq!(
            Error::unknown_callback("faceTracked").to_string(),
            "unknown callback: faceTracked"
        );
        assert_eq!(
            Error::engine("handle released").to_string(),
            "engine error: handle released"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
