//! Error types for hazard classification

/// Result type alias using the service's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for classification operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Completion provider unreachable, rate-limited, or erroring
    #[error("provider error: {0}")]
    Provider(String),

    /// Provider output did not match the expected schema
    #[error("parse error: {0}")]
    Parse(String),

    /// Caller input rejected before classification
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Provider call exceeded its deadline
    #[error("operation timed out")]
    Timeout,

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Transport-level failures, timeouts included.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::Provider(_) | Self::Timeout | Self::Io(_))
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Provider(_) => "provider",
            Self::Parse(_) => "parse",
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Timeout => "timeout",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Provider(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_provider_failure() {
        assert!(Error::Timeout.is_provider_failure());
        assert!(Error::provider("connection refused").is_provider_failure());
        assert!(!Error::parse("missing field").is_provider_failure());
    }

    #[test]
    fn test_error_kind_labels() {
        assert_eq!(Error::Timeout.kind(), "timeout");
        assert_eq!(Error::parse("bad").kind(), "parse");
        assert_eq!(Error::validation("name is required").kind(), "validation");
    }
}
