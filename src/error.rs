//! Error taxonomy for operation dispatch
//!
//! Every failure an invocation can surface to the caller lands in [`Error`].
//! Cancellation is not an error; see [`crate::operation::Outcome`].

use thiserror::Error;

use crate::aws::http::ServiceFault;

/// Errors surfaced by building, invoking and projecting an operation
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory parameter was not bound
    #[error("missing required parameter '{field}'")]
    MissingRequiredField { field: String },

    /// The projection selector names neither a response field nor a parameter
    #[error("invalid select value '{selector}': not a response field or a parameter of this operation")]
    InvalidSelector { selector: String },

    /// A value was bound under a name the operation does not declare
    #[error("operation {operation} has no parameter named '{name}'")]
    UnknownParameter { operation: String, name: String },

    /// A bound value could not be parsed or does not match the declared kind
    #[error("invalid value for parameter '{name}': {reason}")]
    InvalidParameterValue { name: String, reason: String },

    /// No operation is registered under this name
    #[error("unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// Network or name-resolution failure, rewrapped with the endpoint
    #[error("unable to reach {endpoint}: name resolution or network failure ({source})")]
    Transport {
        endpoint: String,
        #[source]
        source: anyhow::Error,
    },

    /// The remote API answered with a fault
    #[error(transparent)]
    Service(#[from] ServiceFault),

    /// Any other client failure, passed through as-is
    #[error(transparent)]
    Client(anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn missing(field: &str) -> Self {
        Error::MissingRequiredField {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid_selector(selector: &str) -> Self {
        Error::InvalidSelector {
            selector: selector.to_string(),
        }
    }

    pub(crate) fn invalid_value(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidParameterValue {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let err = Error::missing("VoiceConnectorId");
        assert_eq!(
            err.to_string(),
            "missing required parameter 'VoiceConnectorId'"
        );
    }

    #[test]
    fn test_transport_message_includes_endpoint() {
        let err = Error::Transport {
            endpoint: "https://voice-chime.us-east-1.amazonaws.com".to_string(),
            source: anyhow::anyhow!("dns error"),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://voice-chime.us-east-1.amazonaws.com"));
        assert!(msg.contains("dns error"));
    }
}
