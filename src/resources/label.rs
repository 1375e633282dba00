use super::{Message, Resource, ResourceKind};
use crate::client::{ApiCursor, Entity, TelerivetError};
use crate::domain::Params;

/// A tag that can be applied to messages.
#[derive(Debug, Clone)]
pub struct Label(Entity);

impl Resource for Label {
    const KIND: ResourceKind = ResourceKind::Label;

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

impl Label {
    pub fn query_messages(&self, params: Params) -> Result<ApiCursor<Message>, TelerivetError> {
        let path = self.0.sub_path("/messages")?;
        self.0.client().cursor(path, params)
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

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
