use crate::client::{ApiRequest, TogglClient};
use crate::error::Result;
use crate::types::Dashboard;

impl TogglClient {
    /// Atividade recente do workspace
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/dashboard/{wid}`
    pub async fn get_dashboard(&self, workspace_id: u64) -> Result<Dashboard> {
        self.api_json(ApiRequest::get(format!("/api/v8/dashboard/{}", workspace_id)))
            .await
    }
}
