use serde::{Deserialize, Serialize};

/// Unified error type for all panel operations.
///
/// Every failure surfaces as exactly one variant; nothing is retried or
/// recovered inside the library. All variants are serializable for
/// structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GratisDnsError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, HTTP 5xx from the panel, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The panel rejected the login, or a later response turned out to be
    /// the login page again (expired session).
    InvalidCredentials {
        /// Original response text fragment, if available.
        raw_message: Option<String>,
    },

    /// The panel answered with an unexpected non-success HTTP status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Error details.
        detail: String,
    },

    /// The response body could not be interpreted at all.
    ///
    /// An absent table or an empty record listing is *not* a parse error;
    /// those produce empty sequences.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request parameter is invalid, e.g. updating a record that carries
    /// no row identifier.
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl GratisDnsError {
    /// Whether this error is expected behavior (caller input, rejected
    /// credentials) rather than an operational failure. Expected errors
    /// should be logged at `warn`, others at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. } | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for GratisDnsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::HttpStatus { status, detail } => {
                write!(f, "Unexpected HTTP status {status}: {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for GratisDnsError {}

/// Convenience type alias for `Result<T, GratisDnsError>`.
pub type Result<T> = std::result::Result<T, GratisDnsError>;
