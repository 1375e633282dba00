use serde::Deserialize;
use serde_json::Value;

use super::TransportError;
use crate::domain::Params;

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Params>,
    pub truncated: bool,
    pub next_marker: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageJson {
    data: Vec<Params>,
    #[serde(default)]
    truncated: bool,
    #[serde(default)]
    next_marker: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountJson {
    count: u64,
}

pub fn decode_page(value: Value) -> Result<Page, TransportError> {
    let parsed: PageJson = serde_json::from_value(value)?;
    Ok(Page {
        items: parsed.data,
        truncated: parsed.truncated,
        next_marker: parsed.next_marker.filter(|marker| !marker.is_empty()),
    })
}

pub fn decode_count(value: Value) -> Result<u64, TransportError> {
    let parsed: CountJson = serde_json::from_value(value)?;
    Ok(parsed.count)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_a_truncated_page() {
        let page = decode_page(json!({
            "data": [{"id": "CT1"}, {"id": "CT2"}],
            "truncated": true,
            "next_marker": "m-2"
        }))
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].get("id"), Some(&json!("CT2")));
        assert!(page.truncated);
        assert_eq!(page.next_marker.as_deref(), Some("m-2"));
    }

    #[test]
    fn missing_flags_default_to_last_page() {
        let page = decode_page(json!({"data": [], "next_marker": ""})).unwrap();
        assert!(!page.truncated);
        assert_eq!(page.next_marker, None);

        let page = decode_page(json!({"data": [], "next_marker": null})).unwrap();
        assert_eq!(page.next_marker, None);
    }

    #[test]
    fn rejects_malformed_pages() {
        assert!(decode_page(json!({"truncated": false})).is_err());
        assert!(decode_page(json!({"data": ["not an object"]})).is_err());
        assert!(decode_page(json!([1, 2])).is_err());
    }

    #[test]
    fn decodes_count() {
        assert_eq!(decode_count(json!({"count": 437})).unwrap(), 437);
        assert!(decode_count(json!({"count": "many"})).is_err());
    }
}
