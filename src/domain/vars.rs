use serde_json::Value;

use crate::domain::field::{self, FieldError};
use crate::domain::validation::ValidationError;
use crate::domain::value::{Params, VarName};

/// Custom variables attached to an entity, tracked for changes separately from its fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomVars {
    values: Params,
    dirty: Params,
}

impl CustomVars {
    /// Maximum length of a string value in UTF-8 bytes.
    pub const MAX_VALUE_BYTES: usize = 4096;

    /// Wrap variables received from the server. Nothing is marked dirty.
    pub fn from_server(values: Params) -> Self {
        Self {
            values,
            dirty: Params::new(),
        }
    }

    /// All variables currently known locally, including pending edits.
    pub fn all(&self) -> &Params {
        &self.values
    }

    /// Raw value of `name`; absent variables read as null.
    pub fn get(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&Value::Null)
    }

    pub fn get_str(&self, name: &str) -> Result<&str, FieldError> {
        field::required(name, field::opt_str(name, self.get(name))?)
    }

    pub fn get_i64(&self, name: &str) -> Result<i64, FieldError> {
        field::required(name, field::opt_i64(name, self.get(name))?)
    }

    pub fn get_f64(&self, name: &str) -> Result<f64, FieldError> {
        field::required(name, field::opt_f64(name, self.get(name))?)
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, FieldError> {
        field::required(name, field::opt_bool(name, self.get(name))?)
    }

    /// Set `name` locally and mark it for the next save.
    ///
    /// Setting `Value::Null` asks the server to delete the variable; the null is kept
    /// locally until the entity is reloaded.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ValidationError> {
        let value = value.into();
        check(name, &value)?;
        self.insert(name, value);
        Ok(())
    }

    /// Set every entry of `values`. Either all are valid and applied, or none are.
    pub fn set_all(&mut self, values: Params) -> Result<(), ValidationError> {
        for (name, value) in &values {
            check(name, value)?;
        }
        for (name, value) in values {
            self.insert(&name, value);
        }
        Ok(())
    }

    fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value.clone());
        self.dirty.insert(name.to_owned(), value);
    }

    /// Variables changed since the last save, with their latest values.
    pub fn dirty_variables(&self) -> &Params {
        &self.dirty
    }

    pub fn clear_dirty_variables(&mut self) {
        self.dirty.clear();
    }
}

fn check(name: &str, value: &Value) -> Result<(), ValidationError> {
    let name = VarName::new(name)?;
    match value {
        Value::String(s) if s.len() > CustomVars::MAX_VALUE_BYTES => {
            Err(ValidationError::VarValueTooLong {
                name: name.as_str().to_owned(),
                max: CustomVars::MAX_VALUE_BYTES,
                actual: s.len(),
            })
        }
        Value::Array(_) | Value::Object(_) => Err(ValidationError::UnsupportedVarValue {
            name: name.as_str().to_owned(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn seeded() -> CustomVars {
        let json = json!({"city": "Nairobi", "age": 31, "score": 2.5, "vip": true});
        CustomVars::from_server(json.as_object().cloned().unwrap())
    }

    #[test]
    fn typed_accessors_read_server_values() {
        let vars = seeded();
        assert_eq!(vars.get_str("city").unwrap(), "Nairobi");
        assert_eq!(vars.get_i64("age").unwrap(), 31);
        assert_eq!(vars.get_f64("score").unwrap(), 2.5);
        assert!(vars.get_bool("vip").unwrap());
        assert!(vars.dirty_variables().is_empty());
    }

    #[test]
    fn typed_accessors_fail_on_absent_or_wrong_shape() {
        let vars = seeded();
        assert!(matches!(
            vars.get_str("missing"),
            Err(FieldError::Missing { .. })
        ));
        assert!(matches!(
            vars.get_i64("city"),
            Err(FieldError::WrongType { .. })
        ));
        assert!(matches!(
            vars.get_bool("age"),
            Err(FieldError::WrongType { .. })
        ));
    }

    #[test]
    fn set_tracks_latest_value() {
        let mut vars = seeded();
        vars.set("city", "Kampala").unwrap();
        vars.set("city", "Lagos").unwrap();
        vars.set("visits", 3).unwrap();

        assert_eq!(vars.get_str("city").unwrap(), "Lagos");
        assert_eq!(
            Value::Object(vars.dirty_variables().clone()),
            json!({"city": "Lagos", "visits": 3})
        );

        vars.clear_dirty_variables();
        assert!(vars.dirty_variables().is_empty());
        assert_eq!(vars.get_i64("visits").unwrap(), 3);
    }

    #[test]
    fn set_null_is_a_delete_signal() {
        let mut vars = seeded();
        vars.set("city", Value::Null).unwrap();

        assert_eq!(vars.get("city"), &Value::Null);
        assert!(matches!(
            vars.get_str("city"),
            Err(FieldError::Missing { .. })
        ));
        assert_eq!(vars.dirty_variables().get("city"), Some(&Value::Null));
    }

    #[test]
    fn set_rejects_invalid_input_without_mutating() {
        let mut vars = seeded();

        assert!(matches!(
            vars.set("bad name", 1),
            Err(ValidationError::InvalidVarName { .. })
        ));
        assert!(matches!(
            vars.set("notes", "x".repeat(CustomVars::MAX_VALUE_BYTES + 1)),
            Err(ValidationError::VarValueTooLong { .. })
        ));
        assert!(matches!(
            vars.set("nested", json!({"a": 1})),
            Err(ValidationError::UnsupportedVarValue { .. })
        ));
        assert!(vars.set("notes", "x".repeat(CustomVars::MAX_VALUE_BYTES)).is_ok());

        assert!(vars.get("nested").is_null());
        assert_eq!(vars.dirty_variables().len(), 1);
    }

    #[test]
    fn set_all_applies_nothing_when_one_entry_is_invalid() {
        let mut vars = seeded();
        let batch = json!({"city": "Lagos", "tags": ["a", "b"]});

        assert!(matches!(
            vars.set_all(batch.as_object().cloned().unwrap()),
            Err(ValidationError::UnsupportedVarValue { .. })
        ));
        assert_eq!(vars.get_str("city").unwrap(), "Nairobi");
        assert!(vars.dirty_variables().is_empty());

        let batch = json!({"city": "Lagos", "visits": 4});
        vars.set_all(batch.as_object().cloned().unwrap()).unwrap();
        assert_eq!(
            Value::Object(vars.dirty_variables().clone()),
            json!({"city": "Lagos", "visits": 4})
        );
    }
}
