use serde_json::Value;

use super::{Resource, ResourceKind};
use crate::client::{Entity, HttpMethod, TelerivetError};

/// A background job applied to every contact, message or row matching a filter.
#[derive(Debug, Clone)]
pub struct Task(Entity);

impl Resource for Task {
    const KIND: ResourceKind = ResourceKind::Task;

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

impl Task {
    /// Stop a task that has not completed. Returns the updated task.
    pub fn cancel(&self) -> Result<Task, TelerivetError> {
        let path = self.0.sub_path("/cancel")?;
        self.0.client().fetch(HttpMethod::Post, &path, None)
    }

    pub fn task_type(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("task_type")
    }

    pub fn task_params(&self) -> Result<&Value, TelerivetError> {
        self.0.get("task_params")
    }

    pub fn filter_type(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("filter_type")
    }

    pub fn filter_params(&self) -> Result<&Value, TelerivetError> {
        self.0.get("filter_params")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn time_active(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_active")
    }

    pub fn time_complete(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_complete")
    }

    pub fn total_rows(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("total_rows")
    }

    pub fn current_row(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("current_row")
    }

    /// One of `created`, `queued`, `active`, `complete`, `failed`, `cancelled`.
    pub fn status(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("status")
    }

    pub fn table_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("table_id")
    }

    pub fn user_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("user_id")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
