use std::fmt;

use serde_json::Value;
use tracing::debug;

use super::{HttpMethod, TelerivetClient, TelerivetError};
use crate::domain::{self, CustomVars, EntityData, Params};
use crate::resources::ResourceKind;

/// Client-side proxy for one server-side resource.
///
/// Field reads come from local data; [`Entity::set`] edits it and remembers the change until
/// [`Entity::save`] sends it. An entity created from an id alone is unloaded: reading a field
/// it does not hold fails with [`TelerivetError::NotLoaded`] until [`Entity::load`] runs.
#[derive(Debug, Clone)]
pub struct Entity {
    client: TelerivetClient,
    kind: ResourceKind,
    data: EntityData,
}

impl Entity {
    pub(crate) fn loaded(client: TelerivetClient, kind: ResourceKind, fields: Params) -> Self {
        Self {
            client,
            kind,
            data: EntityData::loaded(fields),
        }
    }

    pub(crate) fn unloaded(client: TelerivetClient, kind: ResourceKind, seed: Params) -> Self {
        Self {
            client,
            kind,
            data: EntityData::unloaded(seed),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn client(&self) -> &TelerivetClient {
        &self.client
    }

    pub fn data(&self) -> &EntityData {
        &self.data
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_loaded()
    }

    /// Current value of `name`, local edits included. Null when a loaded entity lacks it.
    pub fn get(&self, name: &str) -> Result<&Value, TelerivetError> {
        Ok(self.data.get(name)?)
    }

    pub fn get_str(&self, name: &str) -> Result<Option<&str>, TelerivetError> {
        Ok(domain::opt_str(name, self.get(name)?)?)
    }

    pub fn get_i64(&self, name: &str) -> Result<Option<i64>, TelerivetError> {
        Ok(domain::opt_i64(name, self.get(name)?)?)
    }

    pub fn get_f64(&self, name: &str) -> Result<Option<f64>, TelerivetError> {
        Ok(domain::opt_f64(name, self.get(name)?)?)
    }

    pub fn get_bool(&self, name: &str) -> Result<Option<bool>, TelerivetError> {
        Ok(domain::opt_bool(name, self.get(name)?)?)
    }

    pub fn get_str_list(&self, name: &str) -> Result<Option<Vec<String>>, TelerivetError> {
        Ok(domain::opt_str_list(name, self.get(name)?)?)
    }

    /// Change a field locally. Nothing is sent until [`Entity::save`].
    ///
    /// Setting `vars` merges the object into [`Entity::vars`]; see [`EntityData::set`].
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), TelerivetError> {
        Ok(self.data.set(name, value)?)
    }

    pub(crate) fn set_field(&mut self, name: &str, value: impl Into<Value>) {
        self.data.set_field(name, value);
    }

    pub(crate) fn set_clean(&mut self, name: &str, value: impl Into<Value>) {
        self.data.set_clean(name, value);
    }

    pub fn vars(&self) -> &CustomVars {
        self.data.vars()
    }

    pub fn vars_mut(&mut self) -> &mut CustomVars {
        self.data.vars_mut()
    }

    /// Canonical API path of this resource, built from its identifying fields.
    pub fn base_api_path(&self) -> Result<String, TelerivetError> {
        Ok(self.kind.base_api_path(&self.data)?)
    }

    /// Fetch the full resource if it has not been loaded yet. Unsaved local edits are kept
    /// on top of the fetched data.
    pub fn load(&mut self) -> Result<(), TelerivetError> {
        if self.data.is_loaded() {
            return Ok(());
        }
        let path = self.base_api_path()?;
        let fields = self.client.request_object(HttpMethod::Get, &path, None)?;
        self.data.apply_loaded(fields);
        debug!(kind = self.kind.name(), path = %path, "loaded entity");
        Ok(())
    }

    /// Send every field changed since the last save, plus changed custom variables.
    ///
    /// Local data is not refreshed from the response. If the request fails the pending
    /// changes are kept, so the save can be repeated.
    pub fn save(&mut self) -> Result<(), TelerivetError> {
        let path = self.base_api_path()?;
        let payload = self.data.save_payload();
        self.client
            .do_request(HttpMethod::Post, &path, Some(&payload))?;
        self.data.mark_saved();
        Ok(())
    }

    pub(crate) fn delete(&self) -> Result<(), TelerivetError> {
        let path = self.base_api_path()?;
        self.client.do_request(HttpMethod::Delete, &path, None)?;
        Ok(())
    }

    /// `{base path}{suffix}`, for action endpoints hanging off this resource.
    pub(crate) fn sub_path(&self, suffix: &str) -> Result<String, TelerivetError> {
        Ok(format!("{}{suffix}", self.base_api_path()?))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        if !self.is_loaded() {
            f.write_str(" (not loaded)")?;
        }
        let json = serde_json::to_string(self.data.fields()).map_err(|_| fmt::Error)?;
        write!(f, " JSON: {json}")
    }
}
