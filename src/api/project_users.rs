//! Usuários de projeto
//!
//! `fields` pede campos extras do usuário na resposta (ex.: `["fullname"]`).

use super::{set_fields, wrap};
use crate::client::{join_ids, to_params, ApiRequest, TogglClient};
use crate::error::Result;
use crate::types::ProjectUser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

impl TogglClient {
    /// Adiciona um usuário a um projeto
    ///
    /// `options` aceita `manager`, `rate` e `wid`.
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/project_users`
    pub async fn add_project_user<T: Serialize + ?Sized>(
        &self,
        project_id: u64,
        user_id: u64,
        options: &T,
        fields: Option<&[&str]>,
    ) -> Result<ProjectUser> {
        self.post_project_users(project_id, Value::from(user_id), options, fields)
            .await
    }

    /// Adiciona vários usuários a um projeto
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/project_users` com `uid` = `"id1,id2,..."`
    pub async fn add_project_users<T: Serialize + ?Sized>(
        &self,
        project_id: u64,
        user_ids: &[u64],
        options: &T,
        fields: Option<&[&str]>,
    ) -> Result<Vec<ProjectUser>> {
        self.post_project_users(project_id, Value::String(join_ids(user_ids)), options, fields)
            .await
    }

    async fn post_project_users<T, R>(
        &self,
        project_id: u64,
        uid: Value,
        options: &T,
        fields: Option<&[&str]>,
    ) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut params = to_params(options)?;
        params.insert("pid".to_string(), Value::from(project_id));
        params.insert("uid".to_string(), uid);
        set_fields(&mut params, fields);

        self.validate_options("project-user-add", &mut params)?;

        self.api_data(ApiRequest::post("/api/v8/project_users").body(wrap("project_user", params)))
            .await
    }

    /// Remove um usuário de projeto
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /api/v8/project_users/{id}`
    pub async fn delete_project_user(&self, project_user_id: u64) -> Result<()> {
        self.delete_project_users(&[project_user_id]).await
    }

    /// Remove vários usuários de projeto
    pub async fn delete_project_users(&self, project_user_ids: &[u64]) -> Result<()> {
        self.api_empty(ApiRequest::delete(format!(
            "/api/v8/project_users/{}",
            join_ids(project_user_ids)
        )))
        .await
    }

    /// Atualiza um usuário de projeto
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/project_users/{id}`
    pub async fn update_project_user<T: Serialize + ?Sized>(
        &self,
        project_user_id: u64,
        options: &T,
        fields: Option<&[&str]>,
    ) -> Result<ProjectUser> {
        self.put_project_users(&project_user_id.to_string(), options, fields)
            .await
    }

    /// Atualiza vários usuários de projeto com os mesmos dados
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/project_users/{id1,id2,...}`
    pub async fn update_project_users<T: Serialize + ?Sized>(
        &self,
        project_user_ids: &[u64],
        options: &T,
        fields: Option<&[&str]>,
    ) -> Result<Vec<ProjectUser>> {
        self.put_project_users(&join_ids(project_user_ids), options, fields)
            .await
    }

    async fn put_project_users<T, R>(
        &self,
        ids: &str,
        options: &T,
        fields: Option<&[&str]>,
    ) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut params = to_params(options)?;
        set_fields(&mut params, fields);

        self.api_data(
            ApiRequest::put(format!("/api/v8/project_users/{}", ids))
                .body(wrap("project_user", params)),
        )
        .await
    }
}
