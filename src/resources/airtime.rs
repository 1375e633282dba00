use super::{Resource, ResourceKind};
use crate::client::{Entity, TelerivetError};

/// A mobile airtime top-up sent to a phone number. Read-only apart from custom variables.
#[derive(Debug, Clone)]
pub struct AirtimeTransaction(Entity);

impl Resource for AirtimeTransaction {
    const KIND: ResourceKind = ResourceKind::AirtimeTransaction;

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

impl AirtimeTransaction {
    pub fn to_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("to_number")
    }

    pub fn operator_name(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("operator_name")
    }

    pub fn country(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("country")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn transaction_time(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("transaction_time")
    }

    /// `successful`, `failed`, `cancelled`, `queued`, `pending_approval` or `pending_payment`.
    pub fn status(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("status")
    }

    pub fn status_text(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("status_text")
    }

    /// Decimal amount as sent by the server, e.g. `"10.00"`.
    pub fn value(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("value")
    }

    pub fn value_currency(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("value_currency")
    }

    pub fn price(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("price")
    }

    pub fn price_currency(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("price_currency")
    }

    pub fn contact_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("contact_id")
    }

    pub fn service_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("service_id")
    }

    pub fn external_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("external_id")
    }

    pub fn user_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("user_id")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
