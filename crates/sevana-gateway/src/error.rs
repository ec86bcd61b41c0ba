//! Gateway error envelope
//!
//! Every operation reports failure through this type; the gateway never
//! panics and never throws past the `Result` boundary.

use thiserror::Error;

/// Failure reported by an identity operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The backend reached a decision and said no (bad credentials,
    /// wrong OTP, unknown account).
    #[error("{0}")]
    Denied(String),

    /// The backend misbehaved (malformed response, internal error).
    #[error("backend error: {0}")]
    Backend(String),
}

impl GatewayError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self::Denied(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Denials are final until the user changes their input; network and
    /// backend failures are worth retrying as-is.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GatewayError::Denied(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_displays_bare_message() {
        let err = GatewayError::denied("Invalid OTP. Please try again.");
        assert_eq!(err.to_string(), "Invalid OTP. Please try again.");
    }

    #[test]
    fn test_retryability() {
        assert!(GatewayError::network("timeout").is_retryable());
        assert!(GatewayError::backend("500").is_retryable());
        assert!(!GatewayError::denied("wrong password").is_retryable());
    }
}
