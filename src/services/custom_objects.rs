//! Custom objects and their records.

use crate::client::{Client, Response, Result};
use crate::models::{
    CustomObject, CustomObjectEnvelope, CustomObjectRecord, CustomObjectRecordEnvelope, CustomObjectRecords,
    CustomObjects, ListOptions, RecordModel,
};

/// Operations on `objects`.
#[derive(Debug, Clone, Copy)]
pub struct CustomObjectService<'a> {
    client: &'a Client,
}

impl<'a> CustomObjectService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets the schema of a custom object.
    pub async fn get(&self, id: u64) -> Result<Response<CustomObject>> {
        let response = self
            .client
            .get::<CustomObjectEnvelope>(&format!("objects/{}", id))
            .await?;
        Ok(response.map(|e| e.custom_object))
    }

    /// Lists custom object schemas.
    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<Response<CustomObjects>> {
        self.client.list("objects", opts).await
    }

    /// Lists one page of records. Follow `next_page_link` for more.
    pub async fn list_records(&self, object_id: u64, opts: Option<&ListOptions>) -> Result<Response<CustomObjectRecords>> {
        self.client.list(&format!("objects/{}/records", object_id), opts).await
    }

    /// Inserts a record.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let record = RecordModel::new().with_field("plate", "KA-01-1234");
    /// let stored = fs.custom_objects().create_record(5, &record).await?.into_data();
    /// ```
    pub async fn create_record(&self, object_id: u64, record: &RecordModel) -> Result<Response<CustomObjectRecord>> {
        let response = self
            .client
            .post::<CustomObjectRecordEnvelope, _>(&format!("objects/{}/records", object_id), Some(record))
            .await?;
        Ok(response.map(|e| e.custom_object))
    }

    /// Updates the given fields of a record.
    pub async fn update_record(
        &self,
        object_id: u64,
        record_id: u64,
        record: &RecordModel,
    ) -> Result<Response<CustomObjectRecord>> {
        let response = self
            .client
            .put::<CustomObjectRecordEnvelope, _>(&format!("objects/{}/records/{}", object_id, record_id), Some(record))
            .await?;
        Ok(response.map(|e| e.custom_object))
    }

    /// Deletes a record.
    pub async fn delete_record(&self, object_id: u64, record_id: u64) -> Result<Response<bool>> {
        self.client
            .delete(&format!("objects/{}/records/{}", object_id, record_id))
            .await
    }
}
