use serde_json::Value;

/// Failure reading a field or custom variable out of an entity's JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field is not cached locally and the entity has not been loaded.
    #[error("entity data is not loaded yet; call load() first (field `{field}`)")]
    NotLoaded { field: String },

    /// The value is absent or null where one was required.
    #[error("`{field}` has no value")]
    Missing { field: String },

    /// The value exists but has a different JSON shape.
    #[error("`{field}` is not {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
}

impl FieldError {
    pub(crate) fn wrong_type(field: &str, expected: &'static str) -> Self {
        Self::WrongType {
            field: field.to_owned(),
            expected,
        }
    }
}

pub(crate) fn opt_str<'a>(field: &str, value: &'a Value) -> Result<Option<&'a str>, FieldError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        _ => Err(FieldError::wrong_type(field, "a string")),
    }
}

pub(crate) fn opt_i64(field: &str, value: &Value) -> Result<Option<i64>, FieldError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                // Whole floats such as `12.0` are accepted as integers.
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .map(Some)
            .ok_or_else(|| FieldError::wrong_type(field, "an integer")),
        _ => Err(FieldError::wrong_type(field, "an integer")),
    }
}

pub(crate) fn opt_f64(field: &str, value: &Value) -> Result<Option<f64>, FieldError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| FieldError::wrong_type(field, "a number")),
        _ => Err(FieldError::wrong_type(field, "a number")),
    }
}

pub(crate) fn opt_bool(field: &str, value: &Value) -> Result<Option<bool>, FieldError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        _ => Err(FieldError::wrong_type(field, "a bool")),
    }
}

pub(crate) fn opt_str_list(field: &str, value: &Value) -> Result<Option<Vec<String>>, FieldError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(FieldError::wrong_type(field, "a list of strings")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(FieldError::wrong_type(field, "a list of strings")),
    }
}

/// Turn an optional read into a required one.
pub(crate) fn required<T>(field: &str, value: Option<T>) -> Result<T, FieldError> {
    value.ok_or_else(|| FieldError::Missing {
        field: field.to_owned(),
    })
}
