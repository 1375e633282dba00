use std::error::Error as StdError;

use crate::domain::{FieldError, ValidationError};
use crate::transport::ApiFailure;

const INVALID_PARAM_CODE: &str = "invalid_param";
const NOT_FOUND_CODE: &str = "not_found";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TelerivetClient`](crate::TelerivetClient) and the entities and
/// cursors it hands out.
///
/// Local failures ([`NotLoaded`](Self::NotLoaded), [`Field`](Self::Field),
/// [`Encode`](Self::Encode), [`Validation`](Self::Validation),
/// [`CursorExhausted`](Self::CursorExhausted)) never involve the network; see [`TelerivetError::is_local`]. Nothing is retried.
pub enum TelerivetError {
    /// A field was read on an entity that has not been loaded and does not cache it.
    /// Call `load()` first.
    #[error("entity data is not loaded yet; call load() first (field `{field}`)")]
    NotLoaded { field: String },

    /// A field or custom variable is missing or has an unexpected JSON shape.
    #[error("field error: {0}")]
    Field(FieldError),

    /// The server rejected a request parameter (`invalid_param`).
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        message: String,
        code: String,
        param: Option<String>,
    },

    /// The referenced resource does not exist (`not_found`).
    #[error("not found: {message}")]
    NotFound { message: String, code: String },

    /// Any other non-200 response.
    ///
    /// `code` is `None` when the body was not an error envelope; the message then names
    /// the HTTP status.
    #[error("API error: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Connection-level failure (DNS, TLS, timeouts, etc).
    #[error("could not connect to Telerivet API: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Request parameters could not be serialized or compressed. Nothing was sent.
    #[error("could not encode request body: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A local value was rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// `next_item()` was called on a cursor with nothing left to yield.
    #[error("cursor is exhausted")]
    CursorExhausted,
}

impl TelerivetError {
    /// Whether the error was raised locally rather than reported by the server or network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::NotLoaded { .. }
                | Self::Field(_)
                | Self::Encode(_)
                | Self::Validation(_)
                | Self::CursorExhausted
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Server-provided error code, if any.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter { code, .. } | Self::NotFound { code, .. } => Some(code.as_str()),
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn from_api_failure(failure: ApiFailure) -> Self {
        let ApiFailure {
            status,
            code,
            message,
            param,
        } = failure;
        match code {
            Some(code) if code == INVALID_PARAM_CODE => Self::InvalidParameter {
                message,
                code,
                param,
            },
            Some(code) if code == NOT_FOUND_CODE => Self::NotFound { message, code },
            code => Self::Api {
                status,
                code,
                message,
            },
        }
    }
}

impl From<FieldError> for TelerivetError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::NotLoaded { field } => Self::NotLoaded { field },
            other => Self::Field(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(status: u16, code: Option<&str>, message: &str) -> ApiFailure {
        ApiFailure {
            status,
            code: code.map(str::to_owned),
            message: message.to_owned(),
            param: None,
        }
    }

    #[test]
    fn codes_map_to_kinds() {
        let err = TelerivetError::from_api_failure(failure(
            400,
            Some("invalid_param"),
            "bad to_number",
        ));
        assert!(matches!(
            &err,
            TelerivetError::InvalidParameter { message, .. } if message == "bad to_number"
        ));
        assert_eq!(err.api_code(), Some("invalid_param"));

        let err = TelerivetError::from_api_failure(failure(404, Some("not_found"), "gone"));
        assert!(err.is_not_found());

        let err = TelerivetError::from_api_failure(failure(403, Some("forbidden"), "nope"));
        assert!(matches!(
            err,
            TelerivetError::Api {
                status: 403,
                code: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn field_errors_keep_not_loaded_distinct() {
        let err: TelerivetError = FieldError::NotLoaded {
            field: "name".to_owned(),
        }
        .into();
        assert!(matches!(err, TelerivetError::NotLoaded { ref field } if field == "name"));
        assert!(err.is_local());

        let err: TelerivetError = FieldError::Missing {
            field: "name".to_owned(),
        }
        .into();
        assert!(matches!(err, TelerivetError::Field(FieldError::Missing { .. })));
    }

    #[test]
    fn encode_failures_are_local_and_not_transport() {
        let io = std::io::Error::other("deflate stream closed");
        let err = TelerivetError::Encode(Box::new(crate::transport::TransportError::from(io)));
        assert!(err.is_local());
        assert_eq!(
            err.to_string(),
            "could not encode request body: could not compress request body: deflate stream closed"
        );
    }

    #[test]
    fn server_errors_are_not_local() {
        let err = TelerivetError::from_api_failure(failure(500, None, "Telerivet API error (HTTP 500)"));
        assert!(!err.is_local());
        assert_eq!(err.api_code(), None);
        assert_eq!(err.to_string(), "API error: Telerivet API error (HTTP 500)");
    }
}
