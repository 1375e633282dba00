use super::{Resource, ResourceKind};
use crate::client::{Entity, TelerivetError};

/// A mobile money receipt parsed from an incoming provider message.
#[derive(Debug, Clone)]
pub struct MobileMoneyReceipt(Entity);

impl Resource for MobileMoneyReceipt {
    const KIND: ResourceKind = ResourceKind::MobileMoneyReceipt;

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

impl MobileMoneyReceipt {
    pub fn delete(&self) -> Result<(), TelerivetError> {
        self.0.delete()
    }

    /// Provider's transaction id.
    pub fn tx_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("tx_id")
    }

    pub fn tx_type(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("tx_type")
    }

    pub fn currency(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("currency")
    }

    pub fn amount(&self) -> Result<Option<f64>, TelerivetError> {
        self.0.get_f64("amount")
    }

    pub fn balance(&self) -> Result<Option<f64>, TelerivetError> {
        self.0.get_f64("balance")
    }

    pub fn fee(&self) -> Result<Option<f64>, TelerivetError> {
        self.0.get_f64("fee")
    }

    pub fn name(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("name")
    }

    pub fn phone_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("phone_number")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn other_tx_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("other_tx_id")
    }

    pub fn content(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("content")
    }

    pub fn provider_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("provider_id")
    }

    pub fn contact_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("contact_id")
    }

    pub fn set_contact_id(&mut self, value: &str) {
        self.0.set_field("contact_id", value);
    }

    pub fn phone_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("phone_id")
    }

    pub fn message_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("message_id")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
