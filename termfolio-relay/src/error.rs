use serde::{Deserialize, Serialize};

/// Unified error type for form delivery.
///
/// All variants are serializable for structured error reporting. No variant
/// is retried automatically; the relay makes exactly one request per
/// submission and reports what happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RelayError {
    /// The configured endpoint cannot be posted to at all.
    InvalidEndpoint {
        /// The endpoint as configured.
        endpoint: String,
        /// What is wrong with it.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.) before any response arrived.
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint the request was sent to.
        endpoint: String,
    },

    /// The endpoint answered with a non-success status.
    Rejected {
        /// HTTP status code of the response.
        status: u16,
    },
}

impl RelayError {
    /// Whether this failure is an expected condition (misconfigured or
    /// refusing endpoint) rather than an infrastructure fault. Expected
    /// errors should be logged at `warn`, the rest at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidEndpoint { .. } | Self::Rejected { .. })
    }
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEndpoint { endpoint, detail } => {
                write!(f, "Invalid form endpoint '{endpoint}': {detail}")
            }
            Self::Network { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { endpoint } => {
                write!(f, "Request to {endpoint} timed out")
            }
            Self::Rejected { status } => {
                write!(f, "Form endpoint rejected the submission (HTTP {status})")
            }
        }
    }
}

impl std::error::Error for RelayError {}

/// Convenience type alias for `Result<T, RelayError>`.
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_endpoint() {
        let e = RelayError::InvalidEndpoint {
            endpoint: "ftp://nope".to_string(),
            detail: "endpoint must be an absolute http(s) URL".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid form endpoint 'ftp://nope': endpoint must be an absolute http(s) URL"
        );
    }

    #[test]
    fn display_network() {
        let e = RelayError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = RelayError::Timeout {
            endpoint: "https://formspree.io/f/x".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Request to https://formspree.io/f/x timed out"
        );
    }

    #[test]
    fn display_rejected() {
        let e = RelayError::Rejected { status: 422 };
        assert_eq!(
            e.to_string(),
            "Form endpoint rejected the submission (HTTP 422)"
        );
    }

    #[test]
    fn expected_split_drives_log_levels() {
        assert!(RelayError::Rejected { status: 404 }.is_expected());
        assert!(RelayError::InvalidEndpoint {
            endpoint: String::new(),
            detail: String::new(),
        }
        .is_expected());
        assert!(!RelayError::Network {
            detail: "x".to_string()
        }
        .is_expected());
        assert!(!RelayError::Timeout {
            endpoint: "x".to_string()
        }
        .is_expected());
    }

    #[test]
    fn serialize_json_round_trip() {
        let e = RelayError::Rejected { status: 429 };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Rejected\""));
        assert!(json.contains("\"status\":429"));
        let back: RelayError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }
}
