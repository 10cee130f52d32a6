//! Cliente HTTP para a API do Toggl
//!
//! Suporta dois modos de autenticação:
//! - **API token**: HTTP basic auth `(token, "api_token")` em cada requisição
//! - **Usuário/senha**: `authenticate()` abre uma sessão (cookie) que é usada
//!   pelas requisições seguintes; com `reauth` ligado a sessão é renovada
//!   automaticamente 5s antes de expirar.
//!
//! Os grupos de métodos (clients, projects, time entries, reports, ...) ficam
//! em [`crate::api`], todos implementados sobre `TogglClient`.

use crate::error::{Result, TogglError};
use crate::types::User;
use crate::validator;
use once_cell::sync::{Lazy, OnceCell};
use reqwest::cookie::Jar;
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::{Duration, SystemTime};
use tokio::task::JoinHandle;

/// User agent enviado em `created_with` e nas requisições da Reports API
pub const USER_AGENT: &str = concat!("toggl_client v", env!("CARGO_PKG_VERSION"));

/// Antecedência da reautenticação em relação à expiração da sessão
const REAUTH_MARGIN: Duration = Duration::from_secs(5);

/// Intervalo mínimo entre reautenticações
const REAUTH_FLOOR: Duration = Duration::from_secs(1);

/// Opções de requisição (corpo ou query string) em forma de mapa JSON
pub type Params = Map<String, Value>;

static DEFAULTS: Lazy<RwLock<ClientOptions>> = Lazy::new(|| RwLock::new(ClientOptions::default()));

static DEFAULT_CLIENT: OnceCell<TogglClient> = OnceCell::new();

/// Credenciais de acesso
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    ApiToken(String),
    Password { username: String, password: String },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiToken(_) => f.write_str("ApiToken(***)"),
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Opções do cliente
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub credentials: Option<Credentials>,
    /// Renovar a sessão antes de expirar (sempre ligado em modo token)
    pub reauth: bool,
    /// Nome do cookie de sessão
    pub session_cookie: String,
    /// URL base da API principal
    pub api_url: String,
    /// URL base da Reports API
    pub reports_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            credentials: None,
            reauth: false,
            session_cookie: "toggl_api_session".to_string(),
            api_url: "https://www.toggl.com".to_string(),
            reports_url: "https://toggl.com/reports".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientOptions {
    /// Opções com token de API, partindo dos defaults globais
    pub fn api_token(token: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials::ApiToken(token.into())),
            ..TogglClient::defaults()
        }
    }

    /// Opções com usuário e senha, partindo dos defaults globais
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials::Password {
                username: username.into(),
                password: password.into(),
            }),
            ..TogglClient::defaults()
        }
    }

    pub fn with_reauth(mut self, reauth: bool) -> Self {
        self.reauth = reauth;
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_reports_url(mut self, reports_url: impl Into<String>) -> Self {
        self.reports_url = reports_url.into();
        self
    }

    pub fn with_session_cookie(mut self, name: impl Into<String>) -> Self {
        self.session_cookie = name.into();
        self
    }

    pub fn with_timeouts(mut self, total: Duration, connect: Duration) -> Self {
        self.timeout = total;
        self.connect_timeout = connect;
        self
    }

    fn validate(&mut self) -> Result<()> {
        let has_credentials = match &self.credentials {
            Some(Credentials::ApiToken(token)) => !token.is_empty(),
            Some(Credentials::Password { username, password }) => {
                !username.is_empty() && !password.is_empty()
            }
            None => false,
        };
        if !has_credentials {
            return Err(TogglError::ConfigError(
                "You should either specify apiToken or username and password".to_string(),
            ));
        }

        // token dispensa cookie de sessão
        if matches!(self.credentials, Some(Credentials::ApiToken(_))) {
            self.reauth = true;
        }

        if self.api_url.trim().is_empty() {
            return Err(TogglError::ConfigError(
                "Toggl API base URL is not specified".to_string(),
            ));
        }

        Ok(())
    }
}

/// Envelope `{"data": ...}` usado pela maioria dos endpoints v8
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Descrição de uma requisição antes do envio
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    noauth: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            noauth: false,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub(crate) fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn query(mut self, params: &Params) -> Self {
        self.query = query_pairs(params);
        self
    }

    /// Requisição sem credenciais (ex.: signup)
    pub(crate) fn noauth(mut self) -> Self {
        self.noauth = true;
        self
    }
}

struct Inner {
    http: HttpClient,
    options: ClientOptions,
    credentials: RwLock<Option<Credentials>>,
    /// Resultado da última autenticação; bloqueado para escrita durante `authenticate()`
    auth_data: tokio::sync::RwLock<Option<User>>,
    auth_timer: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        let timer = self
            .auth_timer
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = timer.take() {
            handle.abort();
        }
    }
}

/// Cliente da API do Toggl
///
/// Clonar é barato: todos os clones compartilham a mesma sessão, cookies e
/// timer de reautenticação.
#[derive(Clone)]
pub struct TogglClient {
    inner: Arc<Inner>,
}

impl fmt::Debug for TogglClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglClient")
            .field("api_url", &self.inner.options.api_url)
            .field("reports_url", &self.inner.options.reports_url)
            .field("credentials", &self.credentials())
            .finish()
    }
}

impl TogglClient {
    /// Cria um novo cliente
    ///
    /// # Erros
    ///
    /// - sem token e sem usuário/senha
    /// - `api_url` vazia
    pub fn new(mut options: ClientOptions) -> Result<Self> {
        options.validate()?;
        Self::build(options)
    }

    /// Cria um cliente com token de API sobre os defaults globais
    pub fn with_api_token(token: impl Into<String>) -> Result<Self> {
        Self::new(ClientOptions::api_token(token))
    }

    /// Cria um cliente com usuário e senha sobre os defaults globais
    pub fn with_password(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::new(ClientOptions::password(username, password))
    }

    fn build(mut options: ClientOptions) -> Result<Self> {
        options.api_url = options.api_url.trim_end_matches('/').to_string();
        options.reports_url = options.reports_url.trim_end_matches('/').to_string();

        let http = HttpClient::builder()
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::new(Jar::default()))
            .build()
            .map_err(|e| TogglError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        let credentials = options.credentials.take();

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                options,
                credentials: RwLock::new(credentials),
                auth_data: tokio::sync::RwLock::new(None),
                auth_timer: Mutex::new(None),
            }),
        })
    }

    /// Cliente sem credenciais construído a partir dos defaults globais
    ///
    /// Criado na primeira chamada; alterações posteriores em
    /// [`TogglClient::set_defaults`] não o afetam.
    pub fn default_client() -> Result<Self> {
        DEFAULT_CLIENT
            .get_or_try_init(|| Self::build(Self::defaults()))
            .cloned()
    }

    /// Snapshot dos defaults globais
    pub fn defaults() -> ClientOptions {
        DEFAULTS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Altera os defaults globais usados pelos construtores
    pub fn set_defaults(update: impl FnOnce(&mut ClientOptions)) {
        let mut defaults = DEFAULTS.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut defaults);
    }

    /// Opções efetivas do cliente (sem credenciais)
    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }

    /// Credenciais atuais
    pub fn credentials(&self) -> Option<Credentials> {
        self.inner
            .credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set_api_token(&self, token: String) {
        let mut credentials = self
            .inner
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *credentials = Some(Credentials::ApiToken(token));
    }

    /// Dados do usuário obtidos na última autenticação
    pub async fn auth_data(&self) -> Option<User> {
        self.inner.auth_data.read().await.clone()
    }

    /// Abre uma sessão com usuário e senha
    ///
    /// Só faz sentido no modo usuário/senha; em modo token retorna
    /// [`TogglError::TokenAuthentication`]. Enquanto a autenticação está em
    /// andamento as demais requisições aguardam.
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/me`
    pub async fn authenticate(&self) -> Result<User> {
        let (user, ttl) = self.login().await?;

        if let Some(ttl) = ttl {
            self.set_auth_timer(ttl);
        }

        Ok(user)
    }

    /// Autentica e retorna o TTL do cookie de sessão (quando `reauth` está ligado)
    async fn login(&self) -> Result<(User, Option<Duration>)> {
        let (username, password) = match self.credentials() {
            Some(Credentials::Password { username, password }) => (username, password),
            _ => return Err(TogglError::TokenAuthentication),
        };

        let mut auth_data = self.inner.auth_data.write().await;

        tracing::info!("Authenticating {} against Toggl API", username);

        let response = self
            .send(
                &self.inner.options.api_url,
                ApiRequest::get("/api/v8/me"),
                Some((username, password)),
            )
            .await?;
        let response = check_api_response(response).await?;

        let ttl = if self.inner.options.reauth {
            session_ttl(&response, &self.inner.options.session_cookie)
        } else {
            None
        };

        let envelope: DataEnvelope<User> = read_json(response).await?;
        *auth_data = Some(envelope.data.clone());

        tracing::info!("Authenticated as user {:?}", envelope.data.id);

        Ok((envelope.data, ttl))
    }

    /// Agenda a renovação da sessão para `ttl - 5s`
    fn set_auth_timer(&self, ttl: Duration) {
        let weak = Arc::downgrade(&self.inner);
        let mut delay = ttl.saturating_sub(REAUTH_MARGIN).max(REAUTH_FLOOR);

        tracing::debug!("Reauthentication scheduled in {:?}", delay);

        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(delay).await;

                let Some(inner) = weak.upgrade() else {
                    break;
                };
                let client = TogglClient { inner };

                match client.login().await {
                    Ok((_, Some(ttl))) => {
                        delay = ttl.saturating_sub(REAUTH_MARGIN).max(REAUTH_FLOOR);
                        tracing::debug!("Reauthentication scheduled in {:?}", delay);
                    }
                    Ok((_, None)) => break,
                    Err(e) => {
                        tracing::error!("Reauthentication failed: {}", e);
                        break;
                    }
                }
            }
        });

        if let Some(previous) = self.auth_timer().replace(handle) {
            previous.abort();
        }
    }

    fn auth_timer(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.inner
            .auth_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Indica se há uma reautenticação agendada
    pub fn has_auth_timer(&self) -> bool {
        self.auth_timer()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Cancela a reautenticação agendada; chamar quando o cliente não for mais usado
    pub fn destroy(&self) {
        if let Some(handle) = self.auth_timer().take() {
            handle.abort();
            tracing::debug!("Reauthentication timer cancelled");
        }
    }

    /// Valida `options` com o esquema `schema`, normalizando-as no lugar
    pub fn validate_options(&self, schema: &str, options: &mut Params) -> Result<()> {
        validator::validate(schema, options)
    }

    /// Executa uma requisição na API principal
    pub(crate) async fn api_request(&self, request: ApiRequest) -> Result<Response> {
        let basic_auth = if request.noauth {
            None
        } else {
            match self.credentials() {
                Some(Credentials::ApiToken(token)) => Some((token, "api_token".to_string())),
                _ => {
                    // aguarda authenticate() em andamento
                    if self.inner.auth_data.read().await.is_none() {
                        return Err(TogglError::NotAuthenticated);
                    }
                    None
                }
            }
        };

        let response = self
            .send(&self.inner.options.api_url, request, basic_auth)
            .await?;

        check_api_response(response).await
    }

    /// Executa uma requisição e parseia o JSON da resposta
    pub(crate) async fn api_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.api_request(request).await?;
        read_json(response).await
    }

    /// Executa uma requisição e retorna o campo `data` da resposta
    pub(crate) async fn api_data<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let envelope: DataEnvelope<T> = self.api_json(request).await?;
        Ok(envelope.data)
    }

    /// Executa uma requisição descartando o corpo da resposta
    pub(crate) async fn api_empty(&self, request: ApiRequest) -> Result<()> {
        self.api_request(request).await?;
        Ok(())
    }

    /// Executa uma requisição na Reports API (exige token)
    pub(crate) async fn reports_request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        let token = match self.credentials() {
            Some(Credentials::ApiToken(token)) => token,
            _ => return Err(TogglError::TokenRequired),
        };

        let mut request = ApiRequest::get(path).query(params);
        request
            .query
            .push(("user_agent".to_string(), USER_AGENT.to_string()));

        let response = self
            .send(
                &self.inner.options.reports_url,
                request,
                Some((token, "api_token".to_string())),
            )
            .await?;

        let status = response.status();
        if status.is_success() {
            return read_json(response).await;
        }

        let status_code = status.as_u16();
        let body = response.text().await?;

        tracing::error!("Toggl Reports API error ({}): {}", status_code, body);

        Err(TogglError::report(status_code, parse_body(&body)))
    }

    async fn send(
        &self,
        base_url: &str,
        request: ApiRequest,
        basic_auth: Option<(String, String)>,
    ) -> Result<Response> {
        let url = format!("{}{}", base_url, request.path);

        match &request.body {
            Some(body) => tracing::debug!(
                "{} {} with body: {}",
                request.method,
                url,
                serde_json::to_string(body).unwrap_or_default()
            ),
            None => tracing::debug!("{} {}", request.method, url),
        }

        let mut builder = self
            .inner
            .http
            .request(request.method, &url)
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some((user, pass)) = basic_auth {
            builder = builder.basic_auth(user, Some(pass));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }
}

/// Converte o resultado em erro quando o status não é 2xx
async fn check_api_response(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let status_code = status.as_u16();
    let body = response.text().await?;

    tracing::error!("Toggl API error ({}): {}", status_code, body);

    Err(TogglError::api(status_code, parse_body(&body)))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }

    Ok(serde_json::from_slice(&bytes)?)
}

fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// TTL do cookie de sessão: Max-Age, senão Expires - agora; `None` se zerado
fn session_ttl(response: &Response, cookie_name: &str) -> Option<Duration> {
    let cookie = response.cookies().find(|c| c.name() == cookie_name)?;

    cookie
        .max_age()
        .or_else(|| {
            cookie
                .expires()
                .and_then(|expires| expires.duration_since(SystemTime::now()).ok())
        })
        // sessão já expirada: nada a renovar
        .filter(|ttl| !ttl.is_zero())
}

/// Converte opções em pares de query string
///
/// Arrays viram listas separadas por vírgula; `null` é omitido.
pub(crate) fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                Value::Array(items) => items
                    .iter()
                    .map(crate::error::value_to_string)
                    .collect::<Vec<_>>()
                    .join(","),
                other => other.to_string(),
            };
            Some((key.clone(), value))
        })
        .collect()
}

/// Junta IDs com vírgula (`[1, 2, 3]` -> `"1,2,3"`)
pub(crate) fn join_ids<T: fmt::Display>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Serializa dados de entrada em um mapa de opções
pub(crate) fn to_params<T: Serialize + ?Sized>(data: &T) -> Result<Params> {
    match serde_json::to_value(data)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        _ => Err(TogglError::validation("Request data must be an object")),
    }
}
