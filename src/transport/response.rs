use serde::Deserialize;
use serde_json::Value;

use super::TransportError;

/// Error reported by the server in a non-200 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
    pub param: Option<String>,
}

#[derive(Debug)]
pub enum DecodedResponse {
    Ok(Value),
    Failed(ApiFailure),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    param: Option<String>,
}

/// Decode a response body. A 200 must carry JSON (or nothing, read as null); any other
/// status is turned into an [`ApiFailure`], from the error envelope when there is one.
pub fn decode_response(status: u16, body: &str) -> Result<DecodedResponse, TransportError> {
    if status == 200 {
        if body.trim().is_empty() {
            return Ok(DecodedResponse::Ok(Value::Null));
        }
        return Ok(DecodedResponse::Ok(serde_json::from_str(body)?));
    }

    let failure = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => ApiFailure {
            status,
            code: error.code.filter(|code| !code.is_empty()),
            message: error.message.unwrap_or_default(),
            param: error.param,
        },
        Err(_) => ApiFailure {
            status,
            code: None,
            message: format!("Telerivet API error (HTTP {status})"),
            param: None,
        },
    };
    Ok(DecodedResponse::Failed(failure))
}
