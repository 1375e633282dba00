//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod body;
mod page;
mod query;
mod response;

pub use body::{JsonBody, encode_json_body};
pub use page::{decode_count, decode_page};
pub use query::encode_query_params;
pub use response::{ApiFailure, DecodedResponse, decode_response};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not compress request body: {0}")]
    Compress(#[from] std::io::Error),
}
