//! Grupos de métodos da API do Toggl
//!
//! Cada módulo adiciona um bloco `impl TogglClient` com os endpoints de um
//! recurso. Os caminhos seguem a API v8 (`/api/v8/...`); relatórios usam a
//! Reports API v2 em `reports_url`.
//!
//! Convenções:
//! - payloads de escrita vão embrulhados na chave do recurso
//!   (`{"client": {...}}`, `{"time_entry": {...}}`)
//! - respostas `{"data": ...}` são desembrulhadas
//! - métodos em lote juntam os IDs com vírgula (`/api/v8/tasks/1,2,3`)

mod clients;
mod dashboard;
mod invitations;
mod project_users;
mod projects;
mod reports;
mod tags;
mod tasks;
mod time_entries;
mod user;
mod workspace_users;
mod workspaces;

use crate::client::{ApiRequest, Params, TogglClient};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

impl TogglClient {
    /// GET de uma listagem; a API responde `null` quando não há itens
    pub(crate) async fn api_list<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.api_json(request).await?;
        Ok(items.unwrap_or_default())
    }
}

/// Embrulha `params` na chave do recurso
pub(crate) fn wrap(key: &str, params: Params) -> Value {
    let mut body = Map::new();
    body.insert(key.to_string(), Value::Object(params));
    Value::Object(body)
}

/// Adiciona `fields` (lista separada por vírgula) às opções, se houver
pub(crate) fn set_fields(params: &mut Params, fields: Option<&[&str]>) {
    if let Some(fields) = fields.filter(|f| !f.is_empty()) {
        params.insert("fields".to_string(), Value::String(fields.join(",")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap() {
        let mut params = Params::new();
        params.insert("name".to_string(), json!("Acme"));
        assert_eq!(wrap("client", params), json!({"client": {"name": "Acme"}}));
    }

    #[test]
    fn test_set_fields() {
        let mut params = Params::new();
        set_fields(&mut params, Some(&[]));
        assert!(params.is_empty());

        set_fields(&mut params, Some(&["fullname", "email"]));
        assert_eq!(params["fields"], json!("fullname,email"));
    }
}
