use super::{
    ContactServiceState, DataRow, Group, Message, Resource, ResourceKind, ScheduledMessage,
    segment,
};
use crate::client::{ApiCursor, Entity, HttpMethod, TelerivetError};
use crate::domain::Params;

/// A person (or phone number) known to a project.
#[derive(Debug, Clone)]
pub struct Contact(Entity);

impl Resource for Contact {
    const KIND: ResourceKind = ResourceKind::Contact;

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

impl Contact {
    /// Whether the contact belongs to `group`, according to the loaded `group_ids`.
    pub fn is_in_group(&self, group: &Group) -> Result<bool, TelerivetError> {
        if !self.0.is_loaded() {
            return Err(TelerivetError::NotLoaded {
                field: "group_ids".to_owned(),
            });
        }
        let group_id = group.id()?;
        let ids = self.group_ids()?.unwrap_or_default();
        Ok(ids.iter().any(|id| id == group_id))
    }

    pub fn add_to_group(&mut self, group: &Group) -> Result<(), TelerivetError> {
        let path = self.membership_path(group)?;
        self.0.client().do_request(HttpMethod::Put, &path, None)?;
        self.update_group_ids(group.id()?, true)
    }

    pub fn remove_from_group(&mut self, group: &Group) -> Result<(), TelerivetError> {
        let path = self.membership_path(group)?;
        self.0
            .client()
            .do_request(HttpMethod::Delete, &path, None)?;
        self.update_group_ids(group.id()?, false)
    }

    fn membership_path(&self, group: &Group) -> Result<String, TelerivetError> {
        Ok(format!("{}/contacts/{}", group.base_api_path()?, segment(self.id()?)))
    }

    // Membership lives on the server already; keep the local copy in step without
    // queueing it for the next save.
    fn update_group_ids(&mut self, group_id: &str, member: bool) -> Result<(), TelerivetError> {
        if !self.0.is_loaded() {
            return Ok(());
        }
        let mut ids = self.group_ids()?.unwrap_or_default();
        ids.retain(|id| id != group_id);
        if member {
            ids.push(group_id.to_owned());
        }
        self.0.set_clean("group_ids", ids);
        Ok(())
    }

    pub fn query_messages(&self, params: Params) -> Result<ApiCursor<Message>, TelerivetError> {
        let path = self.0.sub_path("/messages")?;
        self.0.client().cursor(path, params)
    }

    pub fn query_groups(&self, params: Params) -> Result<ApiCursor<Group>, TelerivetError> {
        let path = self.0.sub_path("/groups")?;
        self.0.client().cursor(path, params)
    }

    /// Data table rows linked to this contact, across all tables.
    pub fn query_data_rows(&self, params: Params) -> Result<ApiCursor<DataRow>, TelerivetError> {
        let path = self.0.sub_path("/rows")?;
        self.0.client().cursor(path, params)
    }

    /// Scheduled messages addressed to this contact directly (not via a group).
    pub fn query_scheduled_messages(
        &self,
        params: Params,
    ) -> Result<ApiCursor<ScheduledMessage>, TelerivetError> {
        let path = self.0.sub_path("/scheduled")?;
        self.0.client().cursor(path, params)
    }

    /// This contact's state in every service that tracks one.
    pub fn query_service_states(
        &self,
        params: Params,
    ) -> Result<ApiCursor<ContactServiceState>, TelerivetError> {
        let path = self.0.sub_path("/states")?;
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

    pub fn phone_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("phone_number")
    }

    pub fn set_phone_number(&mut self, value: &str) {
        self.0.set_field("phone_number", value);
    }

    pub fn send_blocked(&self) -> Result<Option<bool>, TelerivetError> {
        self.0.get_bool("send_blocked")
    }

    pub fn set_send_blocked(&mut self, value: bool) {
        self.0.set_field("send_blocked", value);
    }

    /// One of `active`, `handled` or `closed`.
    pub fn conversation_status(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("conversation_status")
    }

    pub fn set_conversation_status(&mut self, value: &str) {
        self.0.set_field("conversation_status", value);
    }

    pub fn default_route_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("default_route_id")
    }

    pub fn set_default_route_id(&mut self, value: &str) {
        self.0.set_field("default_route_id", value);
    }

    /// Unix timestamp.
    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn time_updated(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_updated")
    }

    pub fn last_message_time(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("last_message_time")
    }

    pub fn message_count(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("message_count")
    }

    pub fn group_ids(&self) -> Result<Option<Vec<String>>, TelerivetError> {
        self.0.get_str_list("group_ids")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::{FakeTransport, fake_client, params};

    fn loaded_contact(transport: &FakeTransport, group_ids: serde_json::Value) -> Contact {
        Contact::from_loaded(
            fake_client(transport),
            params(json!({
                "id": "CT1",
                "project_id": "PJ1",
                "name": "Ann",
                "group_ids": group_ids
            })),
        )
    }

    fn group(transport: &FakeTransport, id: &str) -> Group {
        fake_client(transport)
            .init_project_by_id("PJ1")
            .init_group_by_id(id)
            .unwrap()
    }

    #[test]
    fn is_in_group_requires_loaded_contact() {
        let transport = FakeTransport::new();
        let contact = fake_client(&transport)
            .init_project_by_id("PJ1")
            .init_contact_by_id("CT1")
            .unwrap();

        let err = contact.is_in_group(&group(&transport, "CG1")).unwrap_err();
        assert!(matches!(err, TelerivetError::NotLoaded { .. }));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn add_and_remove_group_keep_local_ids_in_step() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!(true));
        transport.respond_json(200, json!(true));
        transport.respond_json(200, json!({}));
        let mut contact = loaded_contact(&transport, json!(["CG0"]));
        let vip = group(&transport, "CG1");

        assert!(!contact.is_in_group(&vip).unwrap());
        contact.add_to_group(&vip).unwrap();
        assert!(contact.is_in_group(&vip).unwrap());
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.api_path(), "/projects/PJ1/groups/CG1/contacts/CT1");

        contact.remove_from_group(&vip).unwrap();
        assert!(!contact.is_in_group(&vip).unwrap());
        assert_eq!(transport.last_request().method, HttpMethod::Delete);
        assert_eq!(contact.group_ids().unwrap(), Some(vec!["CG0".to_owned()]));

        // membership changes are not queued for save
        contact.save().unwrap();
        assert_eq!(transport.last_request().body, Some(json!({})));
    }

    #[test]
    fn failed_membership_change_leaves_ids_alone() {
        let transport = FakeTransport::new();
        transport.respond(
            400,
            r#"{"error":{"code":"invalid_param","message":"bad group","param":"group_id"}}"#,
        );
        let mut contact = loaded_contact(&transport, json!([]));
        let vip = group(&transport, "CG1");

        let err = contact.add_to_group(&vip).unwrap_err();
        assert!(matches!(err, TelerivetError::InvalidParameter { .. }));
        assert!(!contact.is_in_group(&vip).unwrap());
    }

    #[test]
    fn query_data_rows_uses_contact_path() {
        let transport = FakeTransport::new();
        transport.respond_json(
            200,
            json!({
                "data": [{"id": "RW1", "project_id": "PJ1", "table_id": "DT1", "contact_id": "CT1"}],
                "truncated": false
            }),
        );
        let contact = loaded_contact(&transport, json!([]));

        let rows = contact.query_data_rows(Params::new()).unwrap().all().unwrap();
        assert_eq!(rows[0].contact_id().unwrap(), Some("CT1"));
        assert_eq!(
            rows[0].base_api_path().unwrap(),
            "/projects/PJ1/tables/DT1/rows/RW1"
        );
        assert_eq!(transport.last_request().api_path(), "/projects/PJ1/contacts/CT1/rows");
    }

    #[test]
    fn scheduled_and_service_state_queries_use_contact_path() {
        let transport = FakeTransport::new();
        transport.respond_json(
            200,
            json!({"data": [{"id": "SC1", "project_id": "PJ1", "contact_id": "CT1"}], "truncated": false}),
        );
        transport.respond_json(
            200,
            json!({
                "data": [{"id": "q1", "project_id": "PJ1", "service_id": "SV1", "contact_id": "CT1"}],
                "truncated": false
            }),
        );
        let contact = loaded_contact(&transport, json!([]));

        let scheduled = contact
            .query_scheduled_messages(Params::new())
            .unwrap()
            .all()
            .unwrap();
        assert_eq!(scheduled[0].base_api_path().unwrap(), "/projects/PJ1/scheduled/SC1");
        assert_eq!(
            transport.last_request().api_path(),
            "/projects/PJ1/contacts/CT1/scheduled"
        );

        let states = contact.query_service_states(Params::new()).unwrap().all().unwrap();
        assert_eq!(
            states[0].base_api_path().unwrap(),
            "/projects/PJ1/services/SV1/states/CT1"
        );
        assert_eq!(
            transport.last_request().api_path(),
            "/projects/PJ1/contacts/CT1/states"
        );
    }

    #[test]
    fn membership_path_encodes_contact_id() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!(true));
        let mut contact = fake_client(&transport)
            .init_project_by_id("PJ1")
            .init_contact_by_id("CT 1")
            .unwrap();

        contact.add_to_group(&group(&transport, "CG1")).unwrap();
        assert_eq!(
            transport.last_request().api_path(),
            "/projects/PJ1/groups/CG1/contacts/CT%201"
        );
    }

    #[test]
    fn delete_sends_delete_to_base_path() {
        let transport = FakeTransport::new();
        transport.respond(200, "");
        let contact = loaded_contact(&transport, json!([]));

        contact.delete().unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.api_path(), "/projects/PJ1/contacts/CT1");
    }

    #[test]
    fn typed_fields_read_server_shapes() {
        let transport = FakeTransport::new();
        let contact = Contact::from_loaded(
            fake_client(&transport),
            params(json!({
                "id": "CT1",
                "project_id": "PJ1",
                "send_blocked": false,
                "time_created": 1_700_000_000,
                "message_count": 3,
                "conversation_status": "active"
            })),
        );

        assert_eq!(contact.send_blocked().unwrap(), Some(false));
        assert_eq!(contact.time_created().unwrap(), Some(1_700_000_000));
        assert_eq!(contact.message_count().unwrap(), Some(3));
        assert_eq!(contact.conversation_status().unwrap(), Some("active"));
        assert_eq!(contact.phone_number().unwrap(), None);
    }
}
