use super::{Message, Resource, ResourceKind};
use crate::client::{ApiCursor, Entity, TelerivetError};
use crate::domain::Params;

/// A basic route (Android phone or gateway number) that sends and receives messages.
#[derive(Debug, Clone)]
pub struct Phone(Entity);

impl Resource for Phone {
    const KIND: ResourceKind = ResourceKind::Phone;

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

impl Phone {
    pub fn query_messages(&self, params: Params) -> Result<ApiCursor<Message>, TelerivetError> {
        let path = self.0.sub_path("/messages")?;
        self.0.client().cursor(path, params)
    }

    pub fn name(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("name")
    }

    pub fn set_name(&mut self, value: &str) {
        self.0.set_field("name", value);
    }

    pub fn phone_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("phone_number")
    }

    pub fn set_phone_number(&mut self, value: &str) {
        self.0.set_field("phone_number", value);
    }

    pub fn send_paused(&self) -> Result<Option<bool>, TelerivetError> {
        self.0.get_bool("send_paused")
    }

    pub fn set_send_paused(&mut self, value: bool) {
        self.0.set_field("send_paused", value);
    }

    pub fn phone_type(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("phone_type")
    }

    /// ISO 3166-1 country code.
    pub fn country(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("country")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn last_active_time(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("last_active_time")
    }

    /// Battery level in percent, for Android phones.
    pub fn battery(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("battery")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
