use serde_json::Value;

use super::{
    AirtimeTransaction, Broadcast, Contact, DataTable, Group, Label, Message, MobileMoneyReceipt,
    Phone, RelativeScheduledMessage, Resource, ResourceKind, Route, ScheduledMessage, Service,
    Task, segment, single_param,
};
use crate::client::{ApiCursor, Entity, HttpMethod, TelerivetError};
use crate::domain::Params;

/// A Telerivet project: the container for contacts, messages, phones and the rest.
#[derive(Debug, Clone)]
pub struct Project(Entity);

impl Resource for Project {
    const KIND: ResourceKind = ResourceKind::Project;

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

impl Project {
    fn query<R: Resource>(
        &self,
        collection: &str,
        params: Params,
    ) -> Result<ApiCursor<R>, TelerivetError> {
        let path = self.0.sub_path(collection)?;
        self.0.client().cursor(path, params)
    }

    fn get_child<R: Resource>(&self, collection: &str, id: &str) -> Result<R, TelerivetError> {
        let path = self.0.sub_path(&format!("{collection}/{}", segment(id)))?;
        self.0.client().fetch(HttpMethod::Get, &path, None)
    }

    fn init_child<R: Resource>(&self, id: &str) -> Result<R, TelerivetError> {
        Ok(self
            .0
            .client()
            .reference(&[("project_id", self.id()?), ("id", id)]))
    }

    fn post<R: Resource>(&self, suffix: &str, params: &Params) -> Result<R, TelerivetError> {
        let path = self.0.sub_path(suffix)?;
        self.0.client().fetch(HttpMethod::Post, &path, Some(params))
    }

    fn raw(
        &self,
        method: HttpMethod,
        suffix: &str,
        params: Option<&Params>,
    ) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path(suffix)?;
        self.0.client().do_request(method, &path, params)
    }

    /// Send one message (SMS, voice call, USSD request, ...).
    pub fn send_message(&self, params: &Params) -> Result<Message, TelerivetError> {
        self.post("/messages/send", params)
    }

    /// Send a message to a group or a list of numbers as one broadcast.
    pub fn send_broadcast(&self, params: &Params) -> Result<Broadcast, TelerivetError> {
        self.post("/send_broadcast", params)
    }

    /// Send up to 100 messages with different content in one request.
    pub fn send_multi(&self, params: &Params) -> Result<Value, TelerivetError> {
        self.raw(HttpMethod::Post, "/send_multi", Some(params))
    }

    /// Older batch endpoint kept for compatibility; prefer [`Project::send_broadcast`] or
    /// [`Project::send_multi`].
    pub fn send_messages(&self, params: &Params) -> Result<Value, TelerivetError> {
        self.raw(HttpMethod::Post, "/messages/send_batch", Some(params))
    }

    /// Schedule a message to be sent at a fixed time, optionally repeating.
    pub fn schedule_message(&self, params: &Params) -> Result<ScheduledMessage, TelerivetError> {
        self.post("/scheduled", params)
    }

    /// Schedule a message relative to a date stored in each recipient's custom variables.
    pub fn create_relative_scheduled_message(
        &self,
        params: &Params,
    ) -> Result<RelativeScheduledMessage, TelerivetError> {
        self.post("/relative_scheduled", params)
    }

    /// Record an incoming message as if a phone had received it.
    pub fn receive_message(&self, params: &Params) -> Result<Message, TelerivetError> {
        self.post("/messages/receive", params)
    }

    /// Look up a contact by phone number (or `lookup_key`), creating it when absent.
    pub fn get_or_create_contact(&self, params: &Params) -> Result<Contact, TelerivetError> {
        self.post("/contacts", params)
    }

    pub fn import_contacts(&self, params: &Params) -> Result<Value, TelerivetError> {
        self.raw(HttpMethod::Post, "/import_contacts", Some(params))
    }

    pub fn query_contacts(&self, params: Params) -> Result<ApiCursor<Contact>, TelerivetError> {
        self.query("/contacts", params)
    }

    pub fn get_contact_by_id(&self, id: &str) -> Result<Contact, TelerivetError> {
        self.get_child("/contacts", id)
    }

    /// Reference a contact without making a request.
    pub fn init_contact_by_id(&self, id: &str) -> Result<Contact, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_phones(&self, params: Params) -> Result<ApiCursor<Phone>, TelerivetError> {
        self.query("/phones", params)
    }

    pub fn get_phone_by_id(&self, id: &str) -> Result<Phone, TelerivetError> {
        self.get_child("/phones", id)
    }

    pub fn init_phone_by_id(&self, id: &str) -> Result<Phone, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_messages(&self, params: Params) -> Result<ApiCursor<Message>, TelerivetError> {
        self.query("/messages", params)
    }

    pub fn get_message_by_id(&self, id: &str) -> Result<Message, TelerivetError> {
        self.get_child("/messages", id)
    }

    pub fn init_message_by_id(&self, id: &str) -> Result<Message, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_broadcasts(
        &self,
        params: Params,
    ) -> Result<ApiCursor<Broadcast>, TelerivetError> {
        self.query("/broadcasts", params)
    }

    pub fn get_broadcast_by_id(&self, id: &str) -> Result<Broadcast, TelerivetError> {
        self.get_child("/broadcasts", id)
    }

    pub fn init_broadcast_by_id(&self, id: &str) -> Result<Broadcast, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_groups(&self, params: Params) -> Result<ApiCursor<Group>, TelerivetError> {
        self.query("/groups", params)
    }

    pub fn get_or_create_group(&self, name: &str) -> Result<Group, TelerivetError> {
        self.post("/groups", &single_param("name", name))
    }

    pub fn get_group_by_id(&self, id: &str) -> Result<Group, TelerivetError> {
        self.get_child("/groups", id)
    }

    pub fn init_group_by_id(&self, id: &str) -> Result<Group, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_labels(&self, params: Params) -> Result<ApiCursor<Label>, TelerivetError> {
        self.query("/labels", params)
    }

    pub fn get_or_create_label(&self, name: &str) -> Result<Label, TelerivetError> {
        self.post("/labels", &single_param("name", name))
    }

    pub fn get_label_by_id(&self, id: &str) -> Result<Label, TelerivetError> {
        self.get_child("/labels", id)
    }

    pub fn init_label_by_id(&self, id: &str) -> Result<Label, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_data_tables(
        &self,
        params: Params,
    ) -> Result<ApiCursor<DataTable>, TelerivetError> {
        self.query("/tables", params)
    }

    pub fn get_or_create_data_table(&self, name: &str) -> Result<DataTable, TelerivetError> {
        self.post("/tables", &single_param("name", name))
    }

    pub fn get_data_table_by_id(&self, id: &str) -> Result<DataTable, TelerivetError> {
        self.get_child("/tables", id)
    }

    pub fn init_data_table_by_id(&self, id: &str) -> Result<DataTable, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_scheduled_messages(
        &self,
        params: Params,
    ) -> Result<ApiCursor<ScheduledMessage>, TelerivetError> {
        self.query("/scheduled", params)
    }

    pub fn get_scheduled_message_by_id(
        &self,
        id: &str,
    ) -> Result<ScheduledMessage, TelerivetError> {
        self.get_child("/scheduled", id)
    }

    pub fn init_scheduled_message_by_id(
        &self,
        id: &str,
    ) -> Result<ScheduledMessage, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_relative_scheduled_messages(
        &self,
        params: Params,
    ) -> Result<ApiCursor<RelativeScheduledMessage>, TelerivetError> {
        self.query("/relative_scheduled", params)
    }

    pub fn get_relative_scheduled_message_by_id(
        &self,
        id: &str,
    ) -> Result<RelativeScheduledMessage, TelerivetError> {
        self.get_child("/relative_scheduled", id)
    }

    pub fn init_relative_scheduled_message_by_id(
        &self,
        id: &str,
    ) -> Result<RelativeScheduledMessage, TelerivetError> {
        self.init_child(id)
    }

    /// Start a background task over contacts, messages or rows matching a filter.
    pub fn create_task(&self, params: &Params) -> Result<Task, TelerivetError> {
        self.post("/tasks", params)
    }

    pub fn query_tasks(&self, params: Params) -> Result<ApiCursor<Task>, TelerivetError> {
        self.query("/tasks", params)
    }

    pub fn get_task_by_id(&self, id: &str) -> Result<Task, TelerivetError> {
        self.get_child("/tasks", id)
    }

    pub fn init_task_by_id(&self, id: &str) -> Result<Task, TelerivetError> {
        self.init_child(id)
    }

    pub fn create_service(&self, params: &Params) -> Result<Service, TelerivetError> {
        self.post("/services", params)
    }

    pub fn query_services(&self, params: Params) -> Result<ApiCursor<Service>, TelerivetError> {
        self.query("/services", params)
    }

    pub fn get_service_by_id(&self, id: &str) -> Result<Service, TelerivetError> {
        self.get_child("/services", id)
    }

    pub fn init_service_by_id(&self, id: &str) -> Result<Service, TelerivetError> {
        self.init_child(id)
    }

    /// Service log entries. They have no resource type, so each item is the raw object.
    pub fn query_service_logs(&self, params: Params) -> Result<ApiCursor<Params>, TelerivetError> {
        let path = self.0.sub_path("/service_logs")?;
        ApiCursor::new(self.0.client().clone(), path, params, |_, fields| fields)
    }

    pub fn query_routes(&self, params: Params) -> Result<ApiCursor<Route>, TelerivetError> {
        self.query("/routes", params)
    }

    pub fn get_route_by_id(&self, id: &str) -> Result<Route, TelerivetError> {
        self.get_child("/routes", id)
    }

    pub fn init_route_by_id(&self, id: &str) -> Result<Route, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_airtime_transactions(
        &self,
        params: Params,
    ) -> Result<ApiCursor<AirtimeTransaction>, TelerivetError> {
        self.query("/airtime_transactions", params)
    }

    pub fn get_airtime_transaction_by_id(
        &self,
        id: &str,
    ) -> Result<AirtimeTransaction, TelerivetError> {
        self.get_child("/airtime_transactions", id)
    }

    pub fn init_airtime_transaction_by_id(
        &self,
        id: &str,
    ) -> Result<AirtimeTransaction, TelerivetError> {
        self.init_child(id)
    }

    pub fn query_receipts(
        &self,
        params: Params,
    ) -> Result<ApiCursor<MobileMoneyReceipt>, TelerivetError> {
        self.query("/receipts", params)
    }

    pub fn get_receipt_by_id(&self, id: &str) -> Result<MobileMoneyReceipt, TelerivetError> {
        self.get_child("/receipts", id)
    }

    pub fn init_receipt_by_id(&self, id: &str) -> Result<MobileMoneyReceipt, TelerivetError> {
        self.init_child(id)
    }

    /// Users with access to this project.
    pub fn get_users(&self) -> Result<Value, TelerivetError> {
        self.raw(HttpMethod::Get, "/users", None)
    }

    pub fn get_contact_fields(&self) -> Result<Value, TelerivetError> {
        self.raw(HttpMethod::Get, "/contact_fields", None)
    }

    /// Change how a custom contact field is shown in the web app.
    pub fn set_contact_field_metadata(
        &self,
        variable: &str,
        params: &Params,
    ) -> Result<Value, TelerivetError> {
        let suffix = format!("/contact_fields/{}", segment(variable));
        self.raw(HttpMethod::Post, &suffix, Some(params))
    }

    pub fn get_message_fields(&self) -> Result<Value, TelerivetError> {
        self.raw(HttpMethod::Get, "/message_fields", None)
    }

    pub fn set_message_field_metadata(
        &self,
        variable: &str,
        params: &Params,
    ) -> Result<Value, TelerivetError> {
        let suffix = format!("/message_fields/{}", segment(variable));
        self.raw(HttpMethod::Post, &suffix, Some(params))
    }

    /// Aggregate message statistics; `params` selects the time range and grouping.
    pub fn get_message_stats(&self, params: &Params) -> Result<Value, TelerivetError> {
        self.raw(HttpMethod::Get, "/message_stats", Some(params))
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

    pub fn url_slug(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("url_slug")
    }

    pub fn set_url_slug(&mut self, value: &str) {
        self.0.set_field("url_slug", value);
    }

    pub fn default_route_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("default_route_id")
    }

    pub fn set_default_route_id(&mut self, value: &str) {
        self.0.set_field("default_route_id", value);
    }

    pub fn auto_create_contacts(&self) -> Result<Option<bool>, TelerivetError> {
        self.0.get_bool("auto_create_contacts")
    }

    pub fn set_auto_create_contacts(&mut self, value: bool) {
        self.0.set_field("auto_create_contacts", value);
    }

    pub fn organization_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("organization_id")
    }
}
