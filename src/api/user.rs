//! Usuário autenticado e cadastro

use super::wrap;
use crate::client::{to_params, ApiRequest, Credentials, Params, TogglClient, USER_AGENT};
use crate::error::{Result, TogglError};
use crate::types::User;
use serde::Serialize;
use serde_json::Value;

impl TogglClient {
    /// Cadastra um novo usuário
    ///
    /// Não exige credenciais: usa o cliente padrão (ver
    /// [`TogglClient::default_client`]). `timezone` é `"UTC"` quando omitido.
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/signups`
    pub async fn create_user(email: &str, password: &str, timezone: Option<&str>) -> Result<User> {
        let mut params = Params::new();
        params.insert("email".to_string(), Value::from(email));
        params.insert("password".to_string(), Value::from(password));
        params.insert("timezone".to_string(), Value::from(timezone.unwrap_or("UTC")));
        params.insert("created_with".to_string(), Value::from(USER_AGENT));

        tracing::info!("Signing up user {}", email);

        Self::default_client()?
            .api_data(
                ApiRequest::post("/api/v8/signups")
                    .body(wrap("user", params))
                    .noauth(),
            )
            .await
    }

    /// Troca a senha do usuário
    ///
    /// Sem `current_password`, usa a senha configurada no cliente; em modo
    /// token retorna [`TogglError::CurrentPasswordUnknown`].
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/me`
    pub async fn change_user_password(
        &self,
        current_password: Option<&str>,
        password: &str,
    ) -> Result<User> {
        let current = match (current_password, self.credentials()) {
            (Some(current), _) => current.to_string(),
            (None, Some(Credentials::Password { password, .. })) => password,
            (None, _) => return Err(TogglError::CurrentPasswordUnknown),
        };

        let mut params = Params::new();
        params.insert("current_password".to_string(), Value::String(current));
        params.insert("password".to_string(), Value::from(password));

        self.api_data(ApiRequest::put("/api/v8/me").body(wrap("user", params)))
            .await
    }

    /// Dados do usuário autenticado
    ///
    /// `options` aceita `with_related_data` (ou `withRelatedData`) e `since`.
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/me`
    ///
    /// # Exemplo
    ///
    /// ```rust,ignore
    /// let me = toggl
    ///     .get_user_data(&serde_json::json!({"with_related_data": true}))
    ///     .await?;
    /// println!("{:?} workspaces", me.workspaces.map(|w| w.len()));
    /// ```
    pub async fn get_user_data<T: Serialize + ?Sized>(&self, options: &T) -> Result<User> {
        let mut query = to_params(options)?;
        self.validate_options("user-data-get", &mut query)?;

        self.api_data(ApiRequest::get("/api/v8/me").query(&query))
            .await
    }

    /// Gera um novo token de API
    ///
    /// Em modo token o cliente passa a usar o novo token imediatamente.
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/reset_token`
    pub async fn reset_api_token(&self) -> Result<String> {
        let token: String = self
            .api_json(ApiRequest::post("/api/v8/reset_token"))
            .await?;

        if matches!(self.credentials(), Some(Credentials::ApiToken(_))) {
            self.set_api_token(token.clone());
            tracing::info!("API token reset, client switched to the new token");
        }

        Ok(token)
    }

    /// Atualiza os dados do usuário
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/me`
    pub async fn update_user_data<T: Serialize + ?Sized>(&self, data: &T) -> Result<User> {
        let mut params = to_params(data)?;
        self.validate_options("user-data-set", &mut params)?;

        self.api_data(ApiRequest::put("/api/v8/me").body(wrap("user", params)))
            .await
    }
}
