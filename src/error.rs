//! Tipos de erro para o crate toggl_client

use serde_json::Value;
use thiserror::Error;

/// Erros do cliente Toggl
#[derive(Debug, Error)]
pub enum TogglError {
    /// Erro de requisição HTTP (transporte)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API do Toggl (status code não-2xx)
    ///
    /// Quando o corpo da resposta é um array JSON, `message` é o primeiro
    /// elemento e `errors` contém todos. Caso contrário o corpo bruto fica
    /// em `data`.
    #[error("Toggl API error (status {status}): {message}")]
    ApiError {
        status: u16,
        message: String,
        errors: Vec<String>,
        data: Option<Value>,
    },

    /// Erro da Reports API
    #[error("Toggl Reports API error: {message}")]
    ReportError {
        message: String,
        status: Option<u16>,
        data: Option<Value>,
    },

    /// Erro de validação das opções de uma requisição
    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        allowed: Vec<String>,
        value: Option<String>,
    },

    /// Erro de configuração do cliente
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Requisição autenticada sem token e sem sessão ativa
    #[error("Authenticate first")]
    NotAuthenticated,

    /// Reports API exige token de API
    #[error("API token is not specified. Reports API can't be used.")]
    TokenRequired,

    /// `authenticate()` chamado em modo token
    #[error("No need to authenticate thus you use apiToken")]
    TokenAuthentication,

    /// Troca de senha sem senha atual conhecida
    #[error("Current password is unknown.")]
    CurrentPasswordUnknown,

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TogglError {
    /// Monta um `ApiError` a partir do corpo de uma resposta não-2xx
    pub fn api(status: u16, body: Value) -> Self {
        match body {
            Value::Array(items) if !items.is_empty() => {
                let errors: Vec<String> = items.iter().map(value_to_string).collect();
                Self::ApiError {
                    status,
                    message: errors[0].clone(),
                    errors,
                    data: None,
                }
            }
            other => Self::ApiError {
                status,
                message: "Unknown API error".to_string(),
                errors: Vec::new(),
                data: Some(other),
            },
        }
    }

    /// Monta um `ReportError` a partir do corpo de uma resposta da Reports API
    pub fn report(status: u16, body: Value) -> Self {
        match body.get("error") {
            Some(Value::Object(error)) => Self::ReportError {
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown Reports API error")
                    .to_string(),
                status: error
                    .get("code")
                    .and_then(Value::as_u64)
                    .and_then(|code| u16::try_from(code).ok())
                    .or(Some(status)),
                data: Some(Value::Object(error.clone())),
            },
            Some(Value::String(message)) => Self::ReportError {
                message: message.clone(),
                status: Some(status),
                data: None,
            },
            _ => Self::ReportError {
                message: "Unknown Reports API error".to_string(),
                status: Some(status),
                data: Some(body),
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            allowed: Vec::new(),
            value: None,
        }
    }

    /// Valor fora da lista de valores permitidos
    pub fn not_allowed(message: impl Into<String>, allowed: Vec<String>, value: &Value) -> Self {
        Self::ValidationError {
            message: message.into(),
            allowed,
            value: Some(value_to_string(value)),
        }
    }

    /// Status HTTP associado ao erro, quando houver
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::ReportError { status, .. } => *status,
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Representação textual de um valor JSON (strings sem aspas)
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, TogglError>;
