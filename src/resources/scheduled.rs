use serde_json::Value;

use super::{Resource, ResourceKind};
use crate::client::{Entity, TelerivetError};
use crate::domain::Params;

/// A message scheduled for a fixed time, possibly recurring.
#[derive(Debug, Clone)]
pub struct ScheduledMessage(Entity);

impl Resource for ScheduledMessage {
    const KIND: ResourceKind = ResourceKind::ScheduledMessage;

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

impl ScheduledMessage {
    /// Cancel the schedule. Messages already sent are unaffected.
    pub fn delete(&self) -> Result<(), TelerivetError> {
        self.0.delete()
    }

    pub fn content(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("content")
    }

    pub fn set_content(&mut self, value: &str) {
        self.0.set_field("content", value);
    }

    /// iCalendar recurrence rule, or null for a one-off message.
    pub fn rrule(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("rrule")
    }

    pub fn set_rrule(&mut self, value: &str) {
        self.0.set_field("rrule", value);
    }

    pub fn timezone_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("timezone_id")
    }

    pub fn set_timezone_id(&mut self, value: &str) {
        self.0.set_field("timezone_id", value);
    }

    pub fn recipients_str(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("recipients_str")
    }

    pub fn group_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("group_id")
    }

    pub fn set_group_id(&mut self, value: &str) {
        self.0.set_field("group_id", value);
    }

    pub fn contact_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("contact_id")
    }

    pub fn set_contact_id(&mut self, value: &str) {
        self.0.set_field("contact_id", value);
    }

    pub fn to_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("to_number")
    }

    pub fn set_to_number(&mut self, value: &str) {
        self.0.set_field("to_number", value);
    }

    pub fn route_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("route_id")
    }

    pub fn set_route_id(&mut self, value: &str) {
        self.0.set_field("route_id", value);
    }

    pub fn service_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("service_id")
    }

    pub fn set_service_id(&mut self, value: &str) {
        self.0.set_field("service_id", value);
    }

    pub fn message_type(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("message_type")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn start_time(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("start_time")
    }

    pub fn set_start_time(&mut self, value: i64) {
        self.0.set_field("start_time", value);
    }

    pub fn end_time(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("end_time")
    }

    pub fn set_end_time(&mut self, value: i64) {
        self.0.set_field("end_time", value);
    }

    pub fn prev_time(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("prev_time")
    }

    pub fn next_time(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("next_time")
    }

    pub fn occurrences(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("occurrences")
    }

    pub fn replace_variables(&self) -> Result<Option<bool>, TelerivetError> {
        self.0.get_bool("replace_variables")
    }

    pub fn set_replace_variables(&mut self, value: bool) {
        self.0.set_field("replace_variables", value);
    }

    pub fn route_params(&self) -> Result<&Value, TelerivetError> {
        self.0.get("route_params")
    }

    pub fn set_route_params(&mut self, value: Params) {
        self.0.set_field("route_params", value);
    }

    pub fn label_ids(&self) -> Result<Option<Vec<String>>, TelerivetError> {
        self.0.get_str_list("label_ids")
    }

    pub fn set_label_ids(&mut self, value: Vec<String>) {
        self.0.set_field("label_ids", value);
    }

    /// Set when this message was created by a relative schedule.
    pub fn relative_scheduled_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("relative_scheduled_id")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}

/// A message scheduled relative to a date variable of each recipient, e.g. three days
/// before `vars.appointment_date`.
#[derive(Debug, Clone)]
pub struct RelativeScheduledMessage(Entity);

impl Resource for RelativeScheduledMessage {
    const KIND: ResourceKind = ResourceKind::RelativeScheduledMessage;

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

impl RelativeScheduledMessage {
    pub fn delete(&self) -> Result<(), TelerivetError> {
        self.0.delete()
    }

    pub fn content(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("content")
    }

    pub fn set_content(&mut self, value: &str) {
        self.0.set_field("content", value);
    }

    /// `HH:MM` in the schedule's time zone.
    pub fn time_of_day(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("time_of_day")
    }

    pub fn set_time_of_day(&mut self, value: &str) {
        self.0.set_field("time_of_day", value);
    }

    pub fn date_variable(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("date_variable")
    }

    pub fn set_date_variable(&mut self, value: &str) {
        self.0.set_field("date_variable", value);
    }

    /// `D`, `W`, `M` or `Y`.
    pub fn offset_scale(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("offset_scale")
    }

    pub fn set_offset_scale(&mut self, value: &str) {
        self.0.set_field("offset_scale", value);
    }

    pub fn offset_count(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("offset_count")
    }

    pub fn set_offset_count(&mut self, value: i64) {
        self.0.set_field("offset_count", value);
    }

    pub fn rrule(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("rrule")
    }

    pub fn set_rrule(&mut self, value: &str) {
        self.0.set_field("rrule", value);
    }

    pub fn end_time(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("end_time")
    }

    pub fn set_end_time(&mut self, value: i64) {
        self.0.set_field("end_time", value);
    }

    pub fn timezone_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("timezone_id")
    }

    pub fn set_timezone_id(&mut self, value: &str) {
        self.0.set_field("timezone_id", value);
    }

    pub fn group_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("group_id")
    }

    pub fn set_group_id(&mut self, value: &str) {
        self.0.set_field("group_id", value);
    }

    pub fn contact_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("contact_id")
    }

    pub fn set_contact_id(&mut self, value: &str) {
        self.0.set_field("contact_id", value);
    }

    pub fn to_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("to_number")
    }

    pub fn set_to_number(&mut self, value: &str) {
        self.0.set_field("to_number", value);
    }

    pub fn route_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("route_id")
    }

    pub fn set_route_id(&mut self, value: &str) {
        self.0.set_field("route_id", value);
    }

    pub fn message_type(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("message_type")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn label_ids(&self) -> Result<Option<Vec<String>>, TelerivetError> {
        self.0.get_str_list("label_ids")
    }

    pub fn set_label_ids(&mut self, value: Vec<String>) {
        self.0.set_field("label_ids", value);
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
