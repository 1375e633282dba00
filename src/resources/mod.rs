//! Resource façades: typed views over [`Entity`] for each Telerivet resource.

mod airtime;
mod broadcast;
mod contact;
mod data_table;
mod group;
mod label;
mod message;
mod organization;
mod phone;
mod project;
mod receipt;
mod route;
mod scheduled;
mod service;
mod task;

use std::borrow::Cow;

use serde_json::Value;

pub use airtime::AirtimeTransaction;
pub use broadcast::Broadcast;
pub use contact::Contact;
pub use data_table::{DataRow, DataTable};
pub use group::Group;
pub use label::Label;
pub use message::Message;
pub use organization::Organization;
pub use phone::Phone;
pub use project::Project;
pub use receipt::MobileMoneyReceipt;
pub use route::Route;
pub use scheduled::{RelativeScheduledMessage, ScheduledMessage};
pub use service::{ContactServiceState, Service};
pub use task::Task;

use crate::client::{Entity, TelerivetClient, TelerivetError};
use crate::domain::{self, CustomVars, EntityData, FieldError, Params};

/// Kind of server-side resource an [`Entity`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Organization,
    Project,
    Contact,
    Message,
    Broadcast,
    Group,
    Label,
    Phone,
    DataTable,
    DataRow,
    ScheduledMessage,
    RelativeScheduledMessage,
    Task,
    Service,
    ContactServiceState,
    Route,
    AirtimeTransaction,
    MobileMoneyReceipt,
}

impl ResourceKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Project => "Project",
            Self::Contact => "Contact",
            Self::Message => "Message",
            Self::Broadcast => "Broadcast",
            Self::Group => "Group",
            Self::Label => "Label",
            Self::Phone => "Phone",
            Self::DataTable => "DataTable",
            Self::DataRow => "DataRow",
            Self::ScheduledMessage => "ScheduledMessage",
            Self::RelativeScheduledMessage => "RelativeScheduledMessage",
            Self::Task => "Task",
            Self::Service => "Service",
            Self::ContactServiceState => "ContactServiceState",
            Self::Route => "Route",
            Self::AirtimeTransaction => "AirtimeTransaction",
            Self::MobileMoneyReceipt => "MobileMoneyReceipt",
        }
    }

    /// Canonical API path for a resource of this kind, built from its identifying fields.
    ///
    /// Each identifying value is percent-encoded as a single path segment.
    pub fn base_api_path(self, data: &EntityData) -> Result<String, FieldError> {
        let project_scoped = |collection: &str| -> Result<String, FieldError> {
            let project_id = id_field(data, "project_id")?;
            let id = id_field(data, "id")?;
            Ok(format!("/projects/{project_id}/{collection}/{id}"))
        };

        match self {
            Self::Organization => Ok(format!("/organizations/{}", id_field(data, "id")?)),
            Self::Project => Ok(format!("/projects/{}", id_field(data, "id")?)),
            Self::Contact => project_scoped("contacts"),
            Self::Message => project_scoped("messages"),
            Self::Broadcast => project_scoped("broadcasts"),
            Self::Group => project_scoped("groups"),
            Self::Label => project_scoped("labels"),
            Self::Phone => project_scoped("phones"),
            Self::DataTable => project_scoped("tables"),
            Self::ScheduledMessage => project_scoped("scheduled"),
            Self::RelativeScheduledMessage => project_scoped("relative_scheduled"),
            Self::Task => project_scoped("tasks"),
            Self::Service => project_scoped("services"),
            Self::Route => project_scoped("routes"),
            Self::AirtimeTransaction => project_scoped("airtime_transactions"),
            Self::MobileMoneyReceipt => project_scoped("receipts"),
            Self::DataRow => {
                let project_id = id_field(data, "project_id")?;
                let table_id = id_field(data, "table_id")?;
                let id = id_field(data, "id")?;
                Ok(format!("/projects/{project_id}/tables/{table_id}/rows/{id}"))
            }
            // A state is addressed by its contact; `id` is the state name and may be null.
            Self::ContactServiceState => {
                let project_id = id_field(data, "project_id")?;
                let service_id = id_field(data, "service_id")?;
                let contact_id = id_field(data, "contact_id")?;
                Ok(format!(
                    "/projects/{project_id}/services/{service_id}/states/{contact_id}"
                ))
            }
        }
    }
}

fn id_field<'a>(data: &'a EntityData, name: &str) -> Result<Cow<'a, str>, FieldError> {
    let value = domain::required(name, domain::opt_str(name, data.get(name)?)?)?;
    Ok(segment(value))
}

/// Percent-encode `value` for use as one URL path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// A typed wrapper around an [`Entity`].
///
/// Implementors only say which [`ResourceKind`] they are and how to reach their entity;
/// loading, saving and field access are shared.
pub trait Resource: Sized {
    const KIND: ResourceKind;

    fn from_entity(entity: Entity) -> Self;

    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    /// Wrap a full server representation.
    fn from_loaded(client: TelerivetClient, fields: Params) -> Self {
        Self::from_entity(Entity::loaded(client, Self::KIND, fields))
    }

    fn id(&self) -> Result<&str, TelerivetError> {
        let id = self.entity().get_str("id")?;
        Ok(domain::required("id", id)?)
    }

    fn is_loaded(&self) -> bool {
        self.entity().is_loaded()
    }

    fn get(&self, name: &str) -> Result<&Value, TelerivetError> {
        self.entity().get(name)
    }

    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), TelerivetError> {
        self.entity_mut().set(name, value)
    }

    fn vars(&self) -> &CustomVars {
        self.entity().vars()
    }

    fn vars_mut(&mut self) -> &mut CustomVars {
        self.entity_mut().vars_mut()
    }

    fn base_api_path(&self) -> Result<String, TelerivetError> {
        self.entity().base_api_path()
    }

    /// See [`Entity::load`].
    fn load(&mut self) -> Result<(), TelerivetError> {
        self.entity_mut().load()
    }

    /// See [`Entity::save`].
    fn save(&mut self) -> Result<(), TelerivetError> {
        self.entity_mut().save()
    }
}

/// Params with a single string entry, for endpoints keyed by one value.
fn single_param(name: &str, value: &str) -> Params {
    let mut params = Params::new();
    params.insert(name.to_owned(), Value::from(value));
    params
}
