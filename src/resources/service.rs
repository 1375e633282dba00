use serde_json::Value;

use super::{Contact, Resource, ResourceKind, segment};
use crate::client::{ApiCursor, Entity, HttpMethod, TelerivetError};
use crate::domain::Params;

/// An automated service: a poll, auto-reply rule, webhook or scripted flow.
#[derive(Debug, Clone)]
pub struct Service(Entity);

impl Resource for Service {
    const KIND: ResourceKind = ResourceKind::Service;

    fn from_entity(entity: Entity) -> Self {
        Self(entity)
    }

    fn entity(&self) -> &Entity {
        &self.0
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.0
    }
}

impl Service {
    /// Run the service manually, e.g. against a contact or message given in `params`.
    /// The response shape depends on the service type.
    pub fn invoke(&self, params: &Params) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path("/invoke")?;
        self.0
            .client()
            .do_request(HttpMethod::Post, &path, Some(params))
    }

    pub fn get_contact_state(&self, contact: &Contact) -> Result<ContactServiceState, TelerivetError> {
        let path = self.state_path(contact)?;
        self.0.client().fetch(HttpMethod::Get, &path, None)
    }

    pub fn set_contact_state(
        &self,
        contact: &Contact,
        params: &Params,
    ) -> Result<ContactServiceState, TelerivetError> {
        let path = self.state_path(contact)?;
        self.0.client().fetch(HttpMethod::Post, &path, Some(params))
    }

    /// Clear the contact's state. Returns the state as it was before the reset.
    pub fn reset_contact_state(
        &self,
        contact: &Contact,
    ) -> Result<ContactServiceState, TelerivetError> {
        let path = self.state_path(contact)?;
        self.0.client().fetch(HttpMethod::Delete, &path, None)
    }

    pub fn query_contact_states(
        &self,
        params: Params,
    ) -> Result<ApiCursor<ContactServiceState>, TelerivetError> {
        let path = self.0.sub_path("/states")?;
        self.0.client().cursor(path, params)
    }

    fn state_path(&self, contact: &Contact) -> Result<String, TelerivetError> {
        self.0
            .sub_path(&format!("/states/{}", segment(contact.id()?)))
    }

    pub fn delete(&self) -> Result<(), TelerivetError> {
        self.0.delete()
    }

    pub fn name(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("name")
    }

    pub fn set_name(&mut self, value: &str) {
        self.0.set_field("name", value);
    }

    pub fn active(&self) -> Result<Option<bool>, TelerivetError> {
        self.0.get_bool("active")
    }

    pub fn set_active(&mut self, value: bool) {
        self.0.set_field("active", value);
    }

    /// Services run in ascending priority order.
    pub fn priority(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("priority")
    }

    pub fn set_priority(&mut self, value: i64) {
        self.0.set_field("priority", value);
    }

    pub fn contexts(&self) -> Result<&Value, TelerivetError> {
        self.0.get("contexts")
    }

    pub fn label_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("label_id")
    }

    pub fn response_table_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("response_table_id")
    }

    pub fn sample_group_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("sample_group_id")
    }

    pub fn respondent_group_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("respondent_group_id")
    }

    pub fn questions(&self) -> Result<&Value, TelerivetError> {
        self.0.get("questions")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}

/// Where one contact currently is within a service's flow.
#[derive(Debug, Clone)]
pub struct ContactServiceState(Entity);

impl Resource for ContactServiceState {
    const KIND: ResourceKind = ResourceKind::ContactServiceState;

    fn from_entity(entity: Entity) -> Self {
        Self(entity)
    }

    fn entity(&self) -> &Entity {
        &self.0
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.0
    }
}

impl ContactServiceState {
    pub fn delete(&self) -> Result<(), TelerivetError> {
        self.0.delete()
    }

    /// Name of the state, or `None` when the contact has none.
    pub fn state_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("id")
    }

    pub fn set_state_id(&mut self, value: &str) {
        self.0.set_field("id", value);
    }

    pub fn contact_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("contact_id")
    }

    pub fn service_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("service_id")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn time_updated(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_updated")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
