use super::wrap;
use crate::client::{ApiRequest, Params, TogglClient};
use crate::error::Result;
use crate::types::Tag;
use serde_json::Value;

impl TogglClient {
    /// Cria uma tag no workspace
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/tags`
    pub async fn create_tag(&self, name: &str, workspace_id: u64) -> Result<Tag> {
        let mut params = Params::new();
        params.insert("name".to_string(), Value::from(name));
        params.insert("wid".to_string(), Value::from(workspace_id));
        self.validate_options("tag-create", &mut params)?;

        self.api_data(ApiRequest::post("/api/v8/tags").body(wrap("tag", params)))
            .await
    }

    /// Remove uma tag
    pub async fn delete_tag(&self, tag_id: u64) -> Result<()> {
        self.api_empty(ApiRequest::delete(format!("/api/v8/tags/{}", tag_id)))
            .await
    }

    /// Renomeia uma tag
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/tags/{id}`
    pub async fn update_tag_name(&self, tag_id: u64, name: &str) -> Result<Tag> {
        let mut params = Params::new();
        params.insert("name".to_string(), Value::from(name));
        self.validate_options("tag-update", &mut params)?;

        self.api_data(ApiRequest::put(format!("/api/v8/tags/{}", tag_id)).body(wrap("tag", params)))
            .await
    }
}
