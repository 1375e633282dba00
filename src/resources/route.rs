use super::{Resource, ResourceKind};
use crate::client::{Entity, TelerivetError};

/// A custom route: a set of phones or gateways messages can be sent through.
#[derive(Debug, Clone)]
pub struct Route(Entity);

impl Resource for Route {
    const KIND: ResourceKind = ResourceKind::Route;

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

impl Route {
    pub fn name(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("name")
    }

    pub fn set_name(&mut self, value: &str) {
        self.0.set_field("name", value);
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::{FakeTransport, fake_client};

    #[test]
    fn rename_and_save() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!({"id": "RT1", "project_id": "PJ1", "name": "Old"}));
        transport.respond_json(200, json!({}));
        let project = fake_client(&transport).init_project_by_id("PJ1");

        let mut route = project.get_route_by_id("RT1").unwrap();
        assert_eq!(route.name().unwrap(), Some("Old"));
        route.set_name("Primary");
        route.vars_mut().set("region", "north").unwrap();
        route.save().unwrap();

        let request = transport.last_request();
        assert_eq!(request.api_path(), "/projects/PJ1/routes/RT1");
        assert_eq!(
            request.body,
            Some(json!({"name": "Primary", "vars": {"region": "north"}}))
        );
    }
}
