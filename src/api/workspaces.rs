//! Workspaces

use super::wrap;
use crate::client::{to_params, ApiRequest, TogglClient};
use crate::error::Result;
use crate::types::{Client, Project, Tag, Task, Workspace, WorkspaceUsers};
use serde::Serialize;

impl TogglClient {
    /// Workspaces do usuário
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/workspaces`
    pub async fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        self.api_list(ApiRequest::get("/api/v8/workspaces")).await
    }

    /// Dados de um workspace
    pub async fn get_workspace_data(&self, workspace_id: u64) -> Result<Workspace> {
        self.api_data(ApiRequest::get(format!("/api/v8/workspaces/{}", workspace_id)))
            .await
    }

    /// Clients de um workspace
    pub async fn get_workspace_clients(&self, workspace_id: u64) -> Result<Vec<Client>> {
        self.api_list(ApiRequest::get(format!("/api/v8/workspaces/{}/clients", workspace_id)))
            .await
    }

    /// Tags de um workspace
    pub async fn get_workspace_tags(&self, workspace_id: u64) -> Result<Vec<Tag>> {
        self.api_list(ApiRequest::get(format!("/api/v8/workspaces/{}/tags", workspace_id)))
            .await
    }

    /// Projetos de um workspace
    ///
    /// `options` aceita `active` (`"true"`, `"false"`, `"both"`),
    /// `actual_hours` e `only_templates`.
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/workspaces/{wid}/projects`
    pub async fn get_workspace_projects<T: Serialize + ?Sized>(
        &self,
        workspace_id: u64,
        options: &T,
    ) -> Result<Vec<Project>> {
        let mut query = to_params(options)?;
        self.validate_options("workspace-projects", &mut query)?;

        self.api_list(
            ApiRequest::get(format!("/api/v8/workspaces/{}/projects", workspace_id)).query(&query),
        )
        .await
    }

    /// Tarefas de um workspace
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/workspaces/{wid}/tasks`
    pub async fn get_workspace_tasks<T: Serialize + ?Sized>(
        &self,
        workspace_id: u64,
        options: &T,
    ) -> Result<Vec<Task>> {
        let mut query = to_params(options)?;
        self.validate_options("workspace-tasks", &mut query)?;

        self.api_list(
            ApiRequest::get(format!("/api/v8/workspaces/{}/tasks", workspace_id)).query(&query),
        )
        .await
    }

    /// Usuários de um workspace
    ///
    /// Com `actual_users` retorna as contas dos usuários (`/users`); sem, os
    /// vínculos usuário-workspace (`/workspace_users`).
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/workspaces/{wid}/users` ou `/workspace_users`
    pub async fn get_workspace_users(
        &self,
        workspace_id: u64,
        actual_users: bool,
    ) -> Result<WorkspaceUsers> {
        if actual_users {
            let users = self
                .api_list(ApiRequest::get(format!("/api/v8/workspaces/{}/users", workspace_id)))
                .await?;
            return Ok(WorkspaceUsers::Users(users));
        }

        let links = self
            .api_list(ApiRequest::get(format!(
                "/api/v8/workspaces/{}/workspace_users",
                workspace_id
            )))
            .await?;
        Ok(WorkspaceUsers::Memberships(links))
    }

    /// Atualiza um workspace (somente admins)
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/workspaces/{wid}`
    pub async fn update_workspace<T: Serialize + ?Sized>(
        &self,
        workspace_id: u64,
        data: &T,
    ) -> Result<Workspace> {
        let params = to_params(data)?;

        self.api_data(
            ApiRequest::put(format!("/api/v8/workspaces/{}", workspace_id))
                .body(wrap("workspace", params)),
        )
        .await
    }
}
