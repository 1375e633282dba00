//! Typed Rust client for the Telerivet REST API.
//!
//! The crate is split into a domain layer (field bookkeeping, custom variables, validated
//! inputs), a transport layer for wire-format details, a client layer issuing blocking HTTP
//! requests, and typed resource façades such as [`Project`] and [`Contact`].
//!
//! ```rust,no_run
//! use telerivet::{ApiKey, Params, Resource, TelerivetClient};
//!
//! fn main() -> Result<(), telerivet::TelerivetError> {
//!     let client = TelerivetClient::new(ApiKey::new("YOUR_API_KEY")?)?;
//!     let project = client.init_project_by_id("PJ123");
//!
//!     let mut params = Params::new();
//!     params.insert("to_number".into(), "+15555550100".into());
//!     params.insert("content".into(), "hello".into());
//!     let message = project.send_message(&params)?;
//!     println!("{}", message.id()?);
//!
//!     for contact in project.query_contacts(Params::new())?.limit(50) {
//!         let mut contact = contact?;
//!         contact.vars_mut().set("seen", true)?;
//!         contact.save()?;
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod resources;
mod transport;

pub use client::{
    ApiCursor, Entity, HttpMethod, TelerivetClient, TelerivetClientBuilder, TelerivetError,
};
pub use domain::{
    ApiKey, CustomVars, EntityData, FieldError, LoadState, Params, ValidationError, VarName,
};
pub use resources::{
    AirtimeTransaction, Broadcast, Contact, ContactServiceState, DataRow, DataTable, Group, Label,
    Message, MobileMoneyReceipt, Organization, Phone, Project, RelativeScheduledMessage, Resource,
    ResourceKind, Route, ScheduledMessage, Service, Task,
};
