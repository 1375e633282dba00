use super::{Resource, ResourceKind};
use crate::client::{Entity, HttpMethod, TelerivetError};

/// A message sent to many recipients at once.
#[derive(Debug, Clone)]
pub struct Broadcast(Entity);

impl Resource for Broadcast {
    const KIND: ResourceKind = ResourceKind::Broadcast;

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

impl Broadcast {
    /// Stop sending the remaining messages. Returns the updated broadcast.
    pub fn cancel(&self) -> Result<Broadcast, TelerivetError> {
        let path = self.0.sub_path("/cancel")?;
        self.0.client().fetch(HttpMethod::Post, &path, None)
    }

    pub fn title(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("title")
    }

    pub fn status(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("status")
    }

    pub fn message_type(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("message_type")
    }

    pub fn content(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("content")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    /// Number of recipients the server expects to message.
    pub fn recipient_count(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("estimated_count")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
