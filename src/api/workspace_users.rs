//! Usuários de workspace e convites

use super::wrap;
use crate::client::{to_params, ApiRequest, TogglClient};
use crate::error::Result;
use crate::types::{InviteResponse, WorkspaceUser};
use serde::Serialize;
use serde_json::json;

impl TogglClient {
    /// Remove um usuário do workspace
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /api/v8/workspace_users/{id}`
    pub async fn delete_workspace_user(&self, workspace_user_id: u64) -> Result<()> {
        self.api_empty(ApiRequest::delete(format!(
            "/api/v8/workspace_users/{}",
            workspace_user_id
        )))
        .await
    }

    /// Convida usuários para um workspace
    ///
    /// Retorna os vínculos criados e as notificações da API (ex.: e-mails
    /// já cadastrados).
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/workspaces/{wid}/invite`
    pub async fn invite_users(
        &self,
        workspace_id: u64,
        emails: &[&str],
    ) -> Result<(Vec<WorkspaceUser>, Vec<String>)> {
        tracing::info!("Inviting {} user(s) to workspace {}", emails.len(), workspace_id);

        let response: InviteResponse = self
            .api_json(
                ApiRequest::post(format!("/api/v8/workspaces/{}/invite", workspace_id))
                    .body(json!({ "emails": emails })),
            )
            .await?;

        Ok((response.data, response.notifications))
    }

    /// Atualiza um usuário do workspace (ex.: `admin`)
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/workspace_users/{id}`
    pub async fn update_workspace_user<T: Serialize + ?Sized>(
        &self,
        workspace_user_id: u64,
        data: &T,
    ) -> Result<WorkspaceUser> {
        let params = to_params(data)?;

        self.api_data(
            ApiRequest::put(format!("/api/v8/workspace_users/{}", workspace_user_id))
                .body(wrap("workspace_user", params)),
        )
        .await
    }
}
