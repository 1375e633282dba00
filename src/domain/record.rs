use std::collections::BTreeSet;

use serde_json::Value;

use crate::domain::field::FieldError;
use crate::domain::validation::ValidationError;
use crate::domain::value::Params;
use crate::domain::vars::CustomVars;

const VARS_FIELD: &str = "vars";

/// How much of a resource is known locally.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Only identifying or locally-set fields are known; reading anything else needs a load.
    Unloaded { seed: Params },
    /// Fields reflect a full server representation; an absent field is legitimately null.
    Loaded { fields: Params },
}

impl LoadState {
    fn fields(&self) -> &Params {
        match self {
            Self::Unloaded { seed } => seed,
            Self::Loaded { fields } => fields,
        }
    }

    fn fields_mut(&mut self) -> &mut Params {
        match self {
            Self::Unloaded { seed } => seed,
            Self::Loaded { fields } => fields,
        }
    }
}

/// Local state of one server-side resource: current field values, the names of fields
/// changed since the last save, and the resource's custom variables.
///
/// Invariant: every name in the dirty set is a key of the current fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityData {
    state: LoadState,
    dirty: BTreeSet<String>,
    vars: CustomVars,
}

impl EntityData {
    /// Lightweight reference holding only the given fields.
    pub fn unloaded(seed: Params) -> Self {
        let (seed, vars) = split_vars(seed);
        Self {
            state: LoadState::Unloaded { seed },
            dirty: BTreeSet::new(),
            vars,
        }
    }

    /// Full server representation.
    pub fn loaded(fields: Params) -> Self {
        let (fields, vars) = split_vars(fields);
        Self {
            state: LoadState::Loaded { fields },
            dirty: BTreeSet::new(),
            vars,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded { .. })
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Current field values, local edits included.
    pub fn fields(&self) -> &Params {
        self.state.fields()
    }

    /// Current value of `name`.
    ///
    /// Fails with [`FieldError::NotLoaded`] when the field is not cached and the entity is
    /// unloaded; on a loaded entity an absent field reads as null.
    pub fn get(&self, name: &str) -> Result<&Value, FieldError> {
        match &self.state {
            LoadState::Loaded { fields } => Ok(fields.get(name).unwrap_or(&Value::Null)),
            LoadState::Unloaded { seed } => seed.get(name).ok_or_else(|| FieldError::NotLoaded {
                field: name.to_owned(),
            }),
        }
    }

    /// Local write; marks `name` for the next save.
    ///
    /// `vars` is not a field: an object given for it is merged into [`CustomVars`] with
    /// the same validation as [`CustomVars::set`], and anything else is rejected. On error
    /// nothing changes.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ValidationError> {
        if name != VARS_FIELD {
            self.set_field(name, value);
            return Ok(());
        }
        match value.into() {
            Value::Object(values) => self.vars.set_all(values),
            _ => Err(ValidationError::VarsNotObject),
        }
    }

    /// [`EntityData::set`] for names known not to be `vars`.
    pub(crate) fn set_field(&mut self, name: &str, value: impl Into<Value>) {
        debug_assert_ne!(name, VARS_FIELD);
        self.state
            .fields_mut()
            .insert(name.to_owned(), value.into());
        self.dirty.insert(name.to_owned());
    }

    /// Local write that is not sent on save, used to mirror server-side changes made
    /// through dedicated endpoints.
    pub fn set_clean(&mut self, name: &str, value: impl Into<Value>) {
        self.state
            .fields_mut()
            .insert(name.to_owned(), value.into());
    }

    pub fn dirty_fields(&self) -> impl Iterator<Item = &str> {
        self.dirty.iter().map(String::as_str)
    }

    pub fn has_changes(&self) -> bool {
        !self.dirty.is_empty() || !self.vars.dirty_variables().is_empty()
    }

    pub fn vars(&self) -> &CustomVars {
        &self.vars
    }

    pub fn vars_mut(&mut self) -> &mut CustomVars {
        &mut self.vars
    }

    /// Body of the next save: each dirty field with its current value, plus a `vars`
    /// object of the dirty custom variables when there are any.
    pub fn save_payload(&self) -> Params {
        let fields = self.state.fields();
        let mut payload = self
            .dirty
            .iter()
            .filter_map(|name| fields.get(name).map(|value| (name.clone(), value.clone())))
            .collect::<Params>();

        let dirty_vars = self.vars.dirty_variables();
        if !dirty_vars.is_empty() {
            payload.insert(VARS_FIELD.to_owned(), Value::Object(dirty_vars.clone()));
        }
        payload
    }

    /// Forget pending changes after the server accepted them.
    pub fn mark_saved(&mut self) {
        self.dirty.clear();
        self.vars.clear_dirty_variables();
    }

    /// Replace local data with a freshly loaded representation, then put unsaved local
    /// edits (fields and custom variables) back on top of it.
    pub fn apply_loaded(&mut self, fields: Params) {
        let (mut fields, mut vars) = split_vars(fields);

        let current = self.state.fields();
        for name in &self.dirty {
            if let Some(value) = current.get(name) {
                fields.insert(name.clone(), value.clone());
            }
        }
        for (name, value) in self.vars.dirty_variables() {
            // Already validated when first set.
            let _ = vars.set(name, value.clone());
        }

        self.state = LoadState::Loaded { fields };
        self.vars = vars;
    }
}

fn split_vars(mut fields: Params) -> (Params, CustomVars) {
    let vars = match fields.remove(VARS_FIELD) {
        Some(Value::Object(vars)) => CustomVars::from_server(vars),
        Some(other) => {
            fields.insert(VARS_FIELD.to_owned(), other);
            CustomVars::default()
        }
        None => CustomVars::default(),
    };
    (fields, vars)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Params {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn unloaded_reads_only_seeded_fields() {
        let data = EntityData::unloaded(params(json!({"id": "X"})));
        assert!(!data.is_loaded());
        assert_eq!(data.get("id").unwrap(), &json!("X"));
        assert_eq!(
            data.get("anything_else").unwrap_err(),
            FieldError::NotLoaded {
                field: "anything_else".to_owned()
            }
        );
    }

    #[test]
    fn loaded_reads_absent_fields_as_null() {
        let data = EntityData::loaded(params(json!({"id": "X", "name": null})));
        assert!(data.is_loaded());
        assert!(data.get("name").unwrap().is_null());
        assert!(data.get("never_sent").unwrap().is_null());
    }

    #[test]
    fn set_marks_dirty_and_payload_has_latest_values() {
        let mut data = EntityData::unloaded(params(json!({"id": "X"})));
        data.set("name", "first").unwrap();
        data.set("name", "second").unwrap();
        data.set("send_blocked", true).unwrap();

        assert_eq!(data.get("name").unwrap(), &json!("second"));
        assert_eq!(
            data.dirty_fields().collect::<Vec<_>>(),
            vec!["name", "send_blocked"]
        );
        assert_eq!(
            Value::Object(data.save_payload()),
            json!({"name": "second", "send_blocked": true})
        );

        data.mark_saved();
        assert!(!data.has_changes());
        assert!(data.save_payload().is_empty());
        assert_eq!(data.get("name").unwrap(), &json!("second"));
    }

    #[test]
    fn payload_includes_only_dirty_vars() {
        let mut data = EntityData::loaded(params(json!({
            "id": "X",
            "vars": {"a": 1, "b": 2}
        })));
        assert!(data.save_payload().is_empty());

        data.vars_mut().set("b", 3).unwrap();
        assert_eq!(Value::Object(data.save_payload()), json!({"vars": {"b": 3}}));
    }

    #[test]
    fn vars_are_split_out_of_fields() {
        let data = EntityData::loaded(params(json!({"id": "X", "vars": {"city": "Accra"}})));
        assert!(!data.fields().contains_key("vars"));
        assert_eq!(data.vars().get_str("city").unwrap(), "Accra");
    }

    #[test]
    fn apply_loaded_keeps_unsaved_edits() {
        let mut data = EntityData::unloaded(params(json!({"id": "X"})));
        data.set("name", "local").unwrap();
        data.vars_mut().set("tier", "gold").unwrap();

        data.apply_loaded(params(json!({
            "id": "X",
            "name": "server",
            "phone_number": "+15550001111",
            "vars": {"tier": "silver", "city": "Accra"}
        })));

        assert!(data.is_loaded());
        assert_eq!(data.get("name").unwrap(), &json!("local"));
        assert_eq!(data.get("phone_number").unwrap(), &json!("+15550001111"));
        assert_eq!(data.vars().get_str("tier").unwrap(), "gold");
        assert_eq!(data.vars().get_str("city").unwrap(), "Accra");
        assert_eq!(
            Value::Object(data.save_payload()),
            json!({"name": "local", "vars": {"tier": "gold"}})
        );
    }

    #[test]
    fn setting_vars_goes_through_custom_vars() {
        let mut data = EntityData::loaded(params(json!({"id": "X", "vars": {"city": "Accra"}})));
        data.set("vars", json!({"tier": "gold", "city": null})).unwrap();

        assert!(!data.fields().contains_key("vars"));
        assert_eq!(data.vars().get_str("tier").unwrap(), "gold");
        assert!(data.vars().get("city").is_null());
        assert_eq!(data.dirty_fields().count(), 0);
        assert_eq!(
            Value::Object(data.save_payload()),
            json!({"vars": {"tier": "gold", "city": null}})
        );

        data.apply_loaded(params(json!({"id": "X", "vars": {"city": "Accra"}})));
        assert_eq!(data.vars().get_str("tier").unwrap(), "gold");
        assert!(data.get("vars").unwrap().is_null());
    }

    #[test]
    fn setting_vars_rejects_bad_shapes_without_changes() {
        let mut data = EntityData::loaded(params(json!({"id": "X"})));

        assert_eq!(data.set("vars", "tier=gold"), Err(ValidationError::VarsNotObject));
        assert!(matches!(
            data.set("vars", json!({"ok": 1, "bad name": 2})),
            Err(ValidationError::InvalidVarName { .. })
        ));
        assert!(!data.has_changes());
        assert!(data.vars().all().is_empty());
    }

    #[test]
    fn set_clean_does_not_dirty() {
        let mut data = EntityData::loaded(params(json!({"id": "X", "group_ids": []})));
        data.set_clean("group_ids", json!(["g1"]));
        assert_eq!(data.get("group_ids").unwrap(), &json!(["g1"]));
        assert!(!data.has_changes());
    }
}
