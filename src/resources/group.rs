use super::{Contact, Resource, ResourceKind, ScheduledMessage};
use crate::client::{ApiCursor, Entity, TelerivetError};
use crate::domain::Params;

/// A named set of contacts.
#[derive(Debug, Clone)]
pub struct Group(Entity);

impl Resource for Group {
    const KIND: ResourceKind = ResourceKind::Group;

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

impl Group {
    pub fn query_contacts(&self, params: Params) -> Result<ApiCursor<Contact>, TelerivetError> {
        let path = self.0.sub_path("/contacts")?;
        self.0.client().cursor(path, params)
    }

    /// Scheduled messages addressed to this group.
    pub fn query_scheduled_messages(
        &self,
        params: Params,
    ) -> Result<ApiCursor<ScheduledMessage>, TelerivetError> {
        let path = self.0.sub_path("/scheduled")?;
        self.0.client().cursor(path, params)
    }

    /// Delete the group. Its contacts are kept.
    pub fn delete(&self) -> Result<(), TelerivetError> {
        self.0.delete()
    }

    pub fn name(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("name")
    }

    pub fn set_name(&mut self, value: &str) {
        self.0.set_field("name", value);
    }

    pub fn num_members(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("num_members")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn allow_sending(&self) -> Result<Option<bool>, TelerivetError> {
        self.0.get_bool("allow_sending")
    }

    pub fn set_allow_sending(&mut self, value: bool) {
        self.0.set_field("allow_sending", value);
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
