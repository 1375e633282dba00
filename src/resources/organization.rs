use serde_json::Value;

use super::{Project, Resource, ResourceKind, segment};
use crate::client::{ApiCursor, Entity, HttpMethod, TelerivetError};
use crate::domain::Params;

/// An organization owning projects and billing.
#[derive(Debug, Clone)]
pub struct Organization(Entity);

impl Resource for Organization {
    const KIND: ResourceKind = ResourceKind::Organization;

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

impl Organization {
    pub fn create_project(&self, params: &Params) -> Result<Project, TelerivetError> {
        let path = self.0.sub_path("/projects")?;
        self.0.client().fetch(HttpMethod::Post, &path, Some(params))
    }

    pub fn query_projects(&self, params: Params) -> Result<ApiCursor<Project>, TelerivetError> {
        let path = self.0.sub_path("/projects")?;
        self.0.client().cursor(path, params)
    }

    pub fn get_billing_details(&self) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path("/billing")?;
        self.0.client().do_request(HttpMethod::Get, &path, None)
    }

    /// Current usage for one metric, e.g. `"phones"`, `"projects"` or `"messages"`.
    pub fn get_usage(&self, usage_type: &str) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path(&format!("/usage/{}", segment(usage_type)))?;
        self.0.client().do_request(HttpMethod::Get, &path, None)
    }

    pub fn get_message_stats(&self, params: &Params) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path("/message_stats")?;
        self.0
            .client()
            .do_request(HttpMethod::Get, &path, Some(params))
    }

    pub fn name(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("name")
    }

    pub fn set_name(&mut self, value: &str) {
        self.0.set_field("name", value);
    }

    pub fn timezone_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("timezone_id")
    }

    pub fn set_timezone_id(&mut self, value: &str) {
        self.0.set_field("timezone_id", value);
    }
}
