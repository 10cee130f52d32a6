//! Tarefas (somente workspaces pagos)

use super::{set_fields, wrap};
use crate::client::{join_ids, to_params, ApiRequest, TogglClient};
use crate::error::Result;
use crate::types::Task;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

impl TogglClient {
    /// Cria uma tarefa no projeto `project_id`
    ///
    /// `data` pode trazer `wid`, `uid`, `estimated_seconds` e `active`;
    /// `name` e `pid` vêm dos argumentos.
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/tasks`
    pub async fn create_task<T: Serialize + ?Sized>(
        &self,
        name: &str,
        project_id: u64,
        data: &T,
    ) -> Result<Task> {
        let mut params = to_params(data)?;
        params.insert("name".to_string(), Value::from(name));
        params.insert("pid".to_string(), Value::from(project_id));

        self.api_data(ApiRequest::post("/api/v8/tasks").body(wrap("task", params)))
            .await
    }

    /// Remove uma tarefa
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /api/v8/tasks/{id}`
    pub async fn delete_task(&self, task_id: u64) -> Result<()> {
        self.delete_tasks(&[task_id]).await
    }

    /// Remove várias tarefas
    pub async fn delete_tasks(&self, task_ids: &[u64]) -> Result<()> {
        self.api_empty(ApiRequest::delete(format!(
            "/api/v8/tasks/{}",
            join_ids(task_ids)
        )))
        .await
    }

    /// Dados de uma tarefa
    pub async fn get_task_data(&self, task_id: u64) -> Result<Task> {
        self.api_data(ApiRequest::get(format!("/api/v8/tasks/{}", task_id)))
            .await
    }

    /// Atualiza uma tarefa
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/tasks/{id}`
    pub async fn update_task<T: Serialize + ?Sized>(
        &self,
        task_id: u64,
        data: &T,
        fields: Option<&[&str]>,
    ) -> Result<Task> {
        self.put_tasks(&task_id.to_string(), data, fields).await
    }

    /// Atualiza várias tarefas com os mesmos dados
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/tasks/{id1,id2,...}`
    pub async fn update_tasks<T: Serialize + ?Sized>(
        &self,
        task_ids: &[u64],
        data: &T,
        fields: Option<&[&str]>,
    ) -> Result<Vec<Task>> {
        self.put_tasks(&join_ids(task_ids), data, fields).await
    }

    async fn put_tasks<T, R>(&self, ids: &str, data: &T, fields: Option<&[&str]>) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut params = to_params(data)?;
        set_fields(&mut params, fields);

        self.api_data(ApiRequest::put(format!("/api/v8/tasks/{}", ids)).body(wrap("task", params)))
            .await
    }
}
