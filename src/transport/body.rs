use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use super::TransportError;
use crate::domain::Params;

/// Serialized JSON bodies of at least this many bytes are gzip-compressed.
pub const GZIP_THRESHOLD: usize = 400;

/// Request body ready to put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody {
    pub bytes: Vec<u8>,
    pub gzipped: bool,
}

pub fn encode_json_body(params: &Params) -> Result<JsonBody, TransportError> {
    let json = serde_json::to_vec(params)?;
    if json.len() < GZIP_THRESHOLD {
        return Ok(JsonBody {
            bytes: json,
            gzipped: false,
        });
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    Ok(JsonBody {
        bytes: encoder.finish()?,
        gzipped: true,
    })
}
