//! Projetos

use super::wrap;
use crate::client::{join_ids, to_params, ApiRequest, TogglClient};
use crate::error::Result;
use crate::types::{Project, ProjectUser, Task};
use serde::Serialize;

impl TogglClient {
    /// Cria um projeto
    ///
    /// `name` e `wid` são obrigatórios. `is_private` é `true` por padrão
    /// (aplicado pela API quando omitido).
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/projects`
    ///
    /// # Exemplo
    ///
    /// ```rust,ignore
    /// use toggl_client::NewProject;
    ///
    /// let project = toggl
    ///     .create_project(&NewProject::new("An awesome project", 777).billable(true))
    ///     .await?;
    /// ```
    pub async fn create_project<T: Serialize + ?Sized>(&self, data: &T) -> Result<Project> {
        let mut params = to_params(data)?;
        self.validate_options("project-create", &mut params)?;

        tracing::info!("Creating project {:?}", params.get("name"));

        self.api_data(ApiRequest::post("/api/v8/projects").body(wrap("project", params)))
            .await
    }

    /// Remove um projeto
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /api/v8/projects/{id}`
    pub async fn delete_project(&self, project_id: u64) -> Result<()> {
        self.delete_projects(&[project_id]).await
    }

    /// Remove vários projetos de uma vez
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /api/v8/projects/{id1,id2,...}`
    pub async fn delete_projects(&self, project_ids: &[u64]) -> Result<()> {
        self.api_empty(ApiRequest::delete(format!(
            "/api/v8/projects/{}",
            join_ids(project_ids)
        )))
        .await
    }

    /// Dados de um projeto
    pub async fn get_project_data(&self, project_id: u64) -> Result<Project> {
        self.api_data(ApiRequest::get(format!("/api/v8/projects/{}", project_id)))
            .await
    }

    /// Tarefas de um projeto
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/projects/{id}/tasks`
    pub async fn get_project_tasks(&self, project_id: u64) -> Result<Vec<Task>> {
        self.api_list(ApiRequest::get(format!("/api/v8/projects/{}/tasks", project_id)))
            .await
    }

    /// Usuários de um projeto
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/projects/{id}/users`
    pub async fn get_project_users(&self, project_id: u64) -> Result<Vec<ProjectUser>> {
        self.api_list(ApiRequest::get(format!("/api/v8/projects/{}/users", project_id)))
            .await
    }

    /// Atualiza um projeto
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/projects/{id}`
    pub async fn update_project<T: Serialize + ?Sized>(
        &self,
        project_id: u64,
        data: &T,
    ) -> Result<Project> {
        let params = to_params(data)?;

        self.api_data(
            ApiRequest::put(format!("/api/v8/projects/{}", project_id))
                .body(wrap("project", params)),
        )
        .await
    }
}
