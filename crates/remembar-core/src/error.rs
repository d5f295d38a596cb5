//! Error types for the memory bridge.
//!
//! Two layers live here. [`StoreError`] describes what went wrong with a
//! single call to the remote store and is always turned into a message for
//! the end user. [`RemembarError`] covers failures that stop the process from
//! starting at all (bad configuration, an unusable HTTP client).

use thiserror::Error;

/// Result type alias for bridge startup and configuration.
pub type RemembarResult<T> = Result<T, RemembarError>;

/// Result type alias for a single store call.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that prevent the bridge from starting.
#[derive(Error, Debug)]
pub enum RemembarError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client could not be constructed.
    #[error("Client error: {0}")]
    Client(String),
}

impl RemembarError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Which of the three failure tiers a store error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The store answered, but not with a usable success.
    Remote,
    /// The store could not be reached (refused, DNS, timeout).
    Transport,
    /// Anything else, such as a body that does not parse.
    Unexpected,
}

impl ErrorKind {
    /// Get the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Remote => "remote",
            ErrorKind::Transport => "transport",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

/// Failure of a single request against the remote store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store replied with a status other than 200.
    #[error("store returned HTTP {status}")]
    Status { status: u16 },

    /// The request never completed.
    #[error("Network error: {message}")]
    Network {
        message: String,
        timed_out: bool,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The reply could not be decoded.
    #[error("{message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Create an error for a non-200 reply.
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            timed_out: false,
            source: None,
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Get the failure tier.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Status { .. } => ErrorKind::Remote,
            Self::Network { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Unexpected,
        }
    }

    /// HTTP status reported by the store, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request hit its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { timed_out: true, .. })
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
