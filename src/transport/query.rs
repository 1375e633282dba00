use serde_json::{Number, Value};

use crate::domain::Params;

/// Flatten parameters into query pairs using bracket notation for nesting
/// (`vars[city]`, `to_numbers[0]`). Null values are dropped.
pub fn encode_query_params(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        push_value(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_value(pairs: &mut Vec<(String, String)>, name: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                push_value(pairs, format!("{name}[{idx}]"), item);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                push_value(pairs, format!("{name}[{key}]"), item);
            }
        }
        Value::Number(number) => pairs.push((name, format_number(number))),
        Value::Bool(flag) => pairs.push((name, flag.to_string())),
        Value::String(s) => pairs.push((name, s.clone())),
    }
}

fn format_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (f as i64).to_string(),
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn encode(value: Value) -> Vec<(String, String)> {
        encode_query_params(value.as_object().unwrap())
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_owned(), v.to_owned())
    }

    #[test]
    fn scalars_are_stringified() {
        assert_eq!(
            encode(json!({"name": "Bob", "page_size": 50, "starred": true, "ratio": 0.25})),
            vec![
                pair("name", "Bob"),
                pair("page_size", "50"),
                pair("starred", "true"),
                pair("ratio", "0.25"),
            ]
        );
    }

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(encode(json!({"count": 3.0})), vec![pair("count", "3")]);
    }

    #[test]
    fn nested_values_use_bracket_notation() {
        assert_eq!(
            encode(json!({
                "vars": {"city": "Accra", "tags": ["a", "b"]},
                "ids": ["x", {"deep": 1}]
            })),
            vec![
                pair("vars[city]", "Accra"),
                pair("vars[tags][0]", "a"),
                pair("vars[tags][1]", "b"),
                pair("ids[0]", "x"),
                pair("ids[1][deep]", "1"),
            ]
        );
    }

    #[test]
    fn nulls_and_empty_containers_produce_nothing() {
        assert!(encode(json!({"a": null, "b": [], "c": {}})).is_empty());
        assert_eq!(
            encode(json!({"vars": {"gone": null, "kept": "v"}})),
            vec![pair("vars[kept]", "v")]
        );
    }
}
