use serde_json::Value;

use super::{Label, Resource, ResourceKind, segment};
use crate::client::{Entity, HttpMethod, TelerivetError};
use crate::domain::Params;

/// An incoming or outgoing message (SMS, MMS, voice call, USSD, chat).
#[derive(Debug, Clone)]
pub struct Message(Entity);

impl Resource for Message {
    const KIND: ResourceKind = ResourceKind::Message;

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

impl Message {
    /// Whether `label` is applied, according to the loaded `label_ids`.
    pub fn has_label(&self, label: &Label) -> Result<bool, TelerivetError> {
        if !self.0.is_loaded() {
            return Err(TelerivetError::NotLoaded {
                field: "label_ids".to_owned(),
            });
        }
        let label_id = label.id()?;
        let ids = self.label_ids()?.unwrap_or_default();
        Ok(ids.iter().any(|id| id == label_id))
    }

    pub fn add_label(&mut self, label: &Label) -> Result<(), TelerivetError> {
        let path = self.label_path(label)?;
        self.0.client().do_request(HttpMethod::Put, &path, None)?;
        self.update_label_ids(label.id()?, true)
    }

    pub fn remove_label(&mut self, label: &Label) -> Result<(), TelerivetError> {
        let path = self.label_path(label)?;
        self.0
            .client()
            .do_request(HttpMethod::Delete, &path, None)?;
        self.update_label_ids(label.id()?, false)
    }

    fn label_path(&self, label: &Label) -> Result<String, TelerivetError> {
        Ok(format!("{}/messages/{}", label.base_api_path()?, segment(self.id()?)))
    }

    fn update_label_ids(&mut self, label_id: &str, applied: bool) -> Result<(), TelerivetError> {
        if !self.0.is_loaded() {
            return Ok(());
        }
        let mut ids = self.label_ids()?.unwrap_or_default();
        ids.retain(|id| id != label_id);
        if applied {
            ids.push(label_id.to_owned());
        }
        self.0.set_clean("label_ids", ids);
        Ok(())
    }

    /// Queue a failed or cancelled message again. Returns the new message.
    pub fn resend(&self, params: &Params) -> Result<Message, TelerivetError> {
        let path = self.0.sub_path("/resend")?;
        self.0
            .client()
            .fetch(HttpMethod::Post, &path, Some(params))
    }

    /// Cancel a queued message. The server answers `not_cancellable` for messages
    /// already on their way.
    pub fn cancel(&self) -> Result<Message, TelerivetError> {
        let path = self.0.sub_path("/cancel")?;
        self.0.client().fetch(HttpMethod::Post, &path, None)
    }

    pub fn delete(&self) -> Result<(), TelerivetError> {
        self.0.delete()
    }

    /// Parts of an MMS message: content type, filename, size and URL of each.
    pub fn get_mms_parts(&self) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path("/mms_parts")?;
        self.0.client().do_request(HttpMethod::Get, &path, None)
    }

    /// `incoming`, `outgoing`
    pub fn direction(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("direction")
    }

    pub fn status(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("status")
    }

    pub fn message_type(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("message_type")
    }

    pub fn source(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("source")
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn time_sent(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_sent")
    }

    pub fn from_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("from_number")
    }

    pub fn to_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("to_number")
    }

    pub fn content(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("content")
    }

    pub fn starred(&self) -> Result<Option<bool>, TelerivetError> {
        self.0.get_bool("starred")
    }

    pub fn set_starred(&mut self, value: bool) {
        self.0.set_field("starred", value);
    }

    pub fn error_message(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("error_message")
    }

    pub fn set_error_message(&mut self, value: &str) {
        self.0.set_field("error_message", value);
    }

    pub fn label_ids(&self) -> Result<Option<Vec<String>>, TelerivetError> {
        self.0.get_str_list("label_ids")
    }

    pub fn contact_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("contact_id")
    }

    pub fn phone_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("phone_id")
    }

    pub fn broadcast_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("broadcast_id")
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

    fn loaded_message(transport: &FakeTransport) -> Message {
        Message::from_loaded(
            fake_client(transport),
            params(json!({
                "id": "SM1",
                "project_id": "PJ1",
                "direction": "outgoing",
                "status": "failed",
                "label_ids": ["LB0"],
                "starred": false
            })),
        )
    }

    fn label(transport: &FakeTransport) -> Label {
        fake_client(transport)
            .init_project_by_id("PJ1")
            .init_label_by_id("LB1")
            .unwrap()
    }

    #[test]
    fn labels_are_applied_remotely_and_tracked_locally() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!(true));
        transport.respond_json(200, json!(true));
        let mut message = loaded_message(&transport);
        let urgent = label(&transport);

        message.add_label(&urgent).unwrap();
        assert!(message.has_label(&urgent).unwrap());
        assert_eq!(transport.last_request().method, HttpMethod::Put);
        assert_eq!(
            transport.last_request().api_path(),
            "/projects/PJ1/labels/LB1/messages/SM1"
        );

        message.remove_label(&urgent).unwrap();
        assert!(!message.has_label(&urgent).unwrap());
        assert_eq!(message.label_ids().unwrap(), Some(vec!["LB0".to_owned()]));
        assert!(!message.entity().data().has_changes());
    }

    #[test]
    fn has_label_on_unloaded_message_fails_locally() {
        let transport = FakeTransport::new();
        let message = fake_client(&transport)
            .init_project_by_id("PJ1")
            .init_message_by_id("SM1")
            .unwrap();

        assert!(message.has_label(&label(&transport)).unwrap_err().is_local());
    }

    #[test]
    fn resend_returns_new_message() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!({"id": "SM2", "project_id": "PJ1", "status": "queued"}));
        let message = loaded_message(&transport);

        let resent = message
            .resend(&params(json!({"route_id": "PN2"})))
            .unwrap();
        assert_eq!(resent.id().unwrap(), "SM2");
        assert_eq!(transport.last_request().api_path(), "/projects/PJ1/messages/SM1/resend");
        assert_eq!(transport.last_request().body, Some(json!({"route_id": "PN2"})));
    }

    #[test]
    fn cancel_posts_without_body() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!({"id": "SM1", "project_id": "PJ1", "status": "cancelled"}));
        let message = loaded_message(&transport);

        let cancelled = message.cancel().unwrap();
        assert_eq!(cancelled.status().unwrap(), Some("cancelled"));
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, None);
    }

    #[test]
    fn cancel_reports_server_error_code() {
        let transport = FakeTransport::new();
        transport.respond(
            400,
            r#"{"error":{"code":"not_cancellable","message":"Message already sent"}}"#,
        );
        let message = loaded_message(&transport);

        let err = message.cancel().unwrap_err();
        assert_eq!(err.api_code(), Some("not_cancellable"));
        assert!(matches!(err, TelerivetError::Api { status: 400, .. }));
    }

    #[test]
    fn mms_parts_are_returned_raw() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!([{"cid": "p1", "type": "image/jpeg"}]));
        let message = loaded_message(&transport);

        let parts = message.get_mms_parts().unwrap();
        assert_eq!(parts[0]["type"], "image/jpeg");
        assert_eq!(transport.last_request().method, HttpMethod::Get);
    }

    #[test]
    fn starred_is_saved() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!({}));
        let mut message = loaded_message(&transport);

        message.set_starred(true);
        assert_eq!(message.starred().unwrap(), Some(true));
        message.save().unwrap();
        assert_eq!(transport.last_request().body, Some(json!({"starred": true})));
    }
}
