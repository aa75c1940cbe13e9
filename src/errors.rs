use std::fmt;

/// Error types for boleto construction and submission.
#[derive(Debug, Clone)]
pub enum BoletoError {
    /// A builder setter rejected its input. Carries the field name and the
    /// rejected value so callers can report exactly what was refused.
    InvalidField {
        /// Gateway-facing name of the field that failed validation.
        field: &'static str,
        /// The value as received (after normalization, where applicable).
        value: String,
        /// Human-readable constraint that was violated.
        reason: String,
    },
    /// A gateway-mandatory field was never set on the builder. Raised at
    /// send time, in a fixed check order, naming the payload path.
    MissingField(&'static str),
    /// Transport-level failure (connection, timeout, serialization).
    Transport(String),
    /// The gateway answered with a non-success status.
    Gateway {
        /// HTTP status code returned by the gateway.
        status: u16,
        /// Raw response body, unparsed.
        body: String,
    },
}

impl fmt::Display for BoletoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoletoError::InvalidField {
                field,
                value,
                reason,
            } => {
                write!(f, "{} is invalid. {}: {}", field, reason, value)
            }
            BoletoError::MissingField(field) => write!(f, "{} is required", field),
            BoletoError::Transport(msg) => write!(f, "Transport error: {}", msg),
            BoletoError::Gateway { status, body } => {
                write!(f, "Gateway returned {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for BoletoError {}

impl From<reqwest::Error> for BoletoError {
    /// Converts a `reqwest::Error` into a transport error.
    fn from(err: reqwest::Error) -> Self {
        BoletoError::Transport(err.to_string())
    }
}

impl BoletoError {
    /// Shorthand for building an `InvalidField` from a setter.
    pub(crate) fn invalid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BoletoError::InvalidField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
