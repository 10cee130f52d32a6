use crate::client::{ApiRequest, TogglClient};
use crate::error::Result;
use serde::Serialize;
use serde_json::{json, Value};

impl TogglClient {
    /// Convida usuários para uma organização
    ///
    /// `workspaces` segue o formato da API v9
    /// (`[{"workspace_id": 1, "admin": false}]`). A resposta é devolvida sem
    /// tratamento.
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v9/organizations/{id}/invitations`
    pub async fn invite_to_organization<W: Serialize + ?Sized>(
        &self,
        organization_id: u64,
        workspaces: &W,
        emails: &[&str],
    ) -> Result<Value> {
        tracing::info!(
            "Inviting {} user(s) to organization {}",
            emails.len(),
            organization_id
        );

        self.api_json(
            ApiRequest::post(format!(
                "/api/v9/organizations/{}/invitations",
                organization_id
            ))
            .body(json!({ "emails": emails, "workspaces": workspaces })),
        )
        .await
    }
}
