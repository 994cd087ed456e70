//! Error types for the board adapter and dashboard runtime.

use std::fmt;

use thiserror::Error;

/// Comprehensive error type for board access and scheduling.
///
/// None of these escape the board adapter as a panic or a failed refresh:
/// the adapter folds every variant into a sentinel snapshot. They are still
/// typed so the client, the adapter and the logs agree on what went wrong.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Missing or unusable configuration (credentials, base URL)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// HTTP request failed or returned a non-success status
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// A remote collection could not be decoded
    #[error("Could not decode board {collection}: {source}")]
    Decode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// Background task or channel failure in the runner
    #[error("Scheduler error: {message}")]
    Scheduler { message: String },
}

/// Builder for creating transport errors with context.
pub struct TransportErrorBuilder {
    message: String,
}

impl TransportErrorBuilder {
    /// Create a new transport error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> BoardError {
        BoardError::Transport {
            message: self.message,
            source,
        }
    }
}

impl BoardError {
    /// Creates a builder for transport errors.
    pub fn transport(message: impl Into<String>) -> TransportErrorBuilder {
        TransportErrorBuilder::new(message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        BoardError::Configuration {
            message: message.into(),
        }
    }

    /// True for errors that indicate missing setup rather than a failed call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, BoardError::Configuration { .. })
    }
}

/// Specialized extension trait for HTTP Results.
pub trait TransportResultExt<T> {
    /// Map reqwest errors with a message.
    fn transport_context(self, message: &str) -> Result<T>;
}

/// Extension trait for wrapping scheduler failures (join errors, closed
/// channels) with context.
pub trait SchedulerResultExt<T> {
    /// Map any error into [`BoardError::Scheduler`] with a message.
    fn scheduler_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T> TransportResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn transport_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BoardError::transport(message).with_source(e))
    }
}

impl<T, E> SchedulerResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn scheduler_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| BoardError::Scheduler {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = BoardError::configuration("TRELLO_TOKEN is not set");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Configuration error: TRELLO_TOKEN is not set"
        );
    }

    #[test]
    fn test_decode_error_names_collection() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = BoardError::Decode {
            collection: "cards",
            source,
        };
        assert!(!err.is_configuration());
        assert!(err.to_string().starts_with("Could not decode board cards"));
    }

    #[test]
    fn test_scheduler_context() {
        let result: std::result::Result<(), fmt::Error> = Err(fmt::Error);
        let err = result.scheduler_context("dashboard task").unwrap_err();
        assert!(matches!(err, BoardError::Scheduler { .. }));
        assert!(err.to_string().contains("dashboard task"));
    }
}
