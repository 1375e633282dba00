use serde_json::Value;

use super::{Resource, ResourceKind, segment, single_param};
use crate::client::{ApiCursor, Entity, HttpMethod, TelerivetError};
use crate::domain::Params;

/// A spreadsheet-like table of rows whose columns are custom variables.
#[derive(Debug, Clone)]
pub struct DataTable(Entity);

impl Resource for DataTable {
    const KIND: ResourceKind = ResourceKind::DataTable;

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

impl DataTable {
    pub fn query_rows(&self, params: Params) -> Result<ApiCursor<DataRow>, TelerivetError> {
        let path = self.0.sub_path("/rows")?;
        self.0.client().cursor(path, params)
    }

    pub fn create_row(&self, params: &Params) -> Result<DataRow, TelerivetError> {
        let path = self.0.sub_path("/rows")?;
        self.0
            .client()
            .fetch(HttpMethod::Post, &path, Some(params))
    }

    pub fn get_row_by_id(&self, id: &str) -> Result<DataRow, TelerivetError> {
        let path = self.0.sub_path(&format!("/rows/{}", segment(id)))?;
        self.0.client().fetch(HttpMethod::Get, &path, None)
    }

    pub fn init_row_by_id(&self, id: &str) -> Result<DataRow, TelerivetError> {
        let project_id = self.0.get_str("project_id")?;
        let project_id = crate::domain::required("project_id", project_id)?;
        Ok(self.0.client().reference(&[
            ("project_id", project_id),
            ("table_id", self.id()?),
            ("id", id),
        ]))
    }

    /// Column definitions, including each field's type and display order.
    pub fn get_fields(&self) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path("/fields")?;
        self.0.client().do_request(HttpMethod::Get, &path, None)
    }

    /// Update how one column is shown (name, type, order, ...).
    pub fn set_field_metadata(
        &self,
        variable: &str,
        params: &Params,
    ) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path(&format!("/fields/{}", segment(variable)))?;
        self.0
            .client()
            .do_request(HttpMethod::Post, &path, Some(params))
    }

    /// Number of rows per distinct value of `variable`.
    pub fn count_rows_by_value(&self, variable: &str) -> Result<Value, TelerivetError> {
        let path = self.0.sub_path("/count_rows_by_value")?;
        self.0.client().do_request(
            HttpMethod::Get,
            &path,
            Some(&single_param("variable", variable)),
        )
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

    pub fn num_rows(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("num_rows")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}

/// One row of a [`DataTable`]. Cell values are its custom variables.
#[derive(Debug, Clone)]
pub struct DataRow(Entity);

impl Resource for DataRow {
    const KIND: ResourceKind = ResourceKind::DataRow;

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

impl DataRow {
    pub fn delete(&self) -> Result<(), TelerivetError> {
        self.0.delete()
    }

    pub fn contact_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("contact_id")
    }

    pub fn set_contact_id(&mut self, value: &str) {
        self.0.set_field("contact_id", value);
    }

    pub fn from_number(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("from_number")
    }

    pub fn set_from_number(&mut self, value: &str) {
        self.0.set_field("from_number", value);
    }

    pub fn time_created(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_created")
    }

    pub fn time_updated(&self) -> Result<Option<i64>, TelerivetError> {
        self.0.get_i64("time_updated")
    }

    pub fn table_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("table_id")
    }

    pub fn project_id(&self) -> Result<Option<&str>, TelerivetError> {
        self.0.get_str("project_id")
    }
}
