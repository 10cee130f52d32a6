//! Clients
//!
//! Clients agrupam projetos de um workspace para faturamento.

use super::wrap;
use crate::client::{to_params, ApiRequest, Params, TogglClient};
use crate::error::Result;
use crate::types::{ActiveFilter, Client, Project};
use serde::Serialize;
use serde_json::Value;

impl TogglClient {
    /// Cria um client
    ///
    /// `name` e `wid` são obrigatórios.
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/clients`
    ///
    /// # Exemplo
    ///
    /// ```rust,ignore
    /// use toggl_client::NewClient;
    ///
    /// let client = toggl.create_client(&NewClient::new("Very Big Company", 777)).await?;
    /// ```
    pub async fn create_client<T: Serialize + ?Sized>(&self, data: &T) -> Result<Client> {
        let mut params = to_params(data)?;
        self.validate_options("client-create", &mut params)?;

        tracing::info!("Creating client {:?}", params.get("name"));

        self.api_data(ApiRequest::post("/api/v8/clients").body(wrap("client", params)))
            .await
    }

    /// Remove um client
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /api/v8/clients/{id}`
    pub async fn delete_client(&self, client_id: u64) -> Result<()> {
        self.api_empty(ApiRequest::delete(format!("/api/v8/clients/{}", client_id)))
            .await
    }

    /// Dados de um client
    pub async fn get_client_data(&self, client_id: u64) -> Result<Client> {
        self.api_data(ApiRequest::get(format!("/api/v8/clients/{}", client_id)))
            .await
    }

    /// Projetos de um client filtrados por estado
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/clients/{id}/projects?active={true|false|both}`
    pub async fn get_client_projects(
        &self,
        client_id: u64,
        active: ActiveFilter,
    ) -> Result<Vec<Project>> {
        let mut query = Params::new();
        query.insert("active".to_string(), Value::String(active.to_string()));
        self.validate_options("client-get-projects", &mut query)?;

        self.api_list(ApiRequest::get(format!("/api/v8/clients/{}/projects", client_id)).query(&query))
            .await
    }

    /// Clients visíveis para o usuário
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/clients`
    pub async fn get_clients(&self) -> Result<Vec<Client>> {
        self.api_list(ApiRequest::get("/api/v8/clients")).await
    }

    /// Atualiza um client
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/clients/{id}`
    pub async fn update_client<T: Serialize + ?Sized>(
        &self,
        client_id: u64,
        data: &T,
    ) -> Result<Client> {
        let params = to_params(data)?;

        self.api_data(
            ApiRequest::put(format!("/api/v8/clients/{}", client_id)).body(wrap("client", params)),
        )
        .await
    }
}
