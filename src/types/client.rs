//! Clients (clientes faturáveis de um workspace)

use serde::{Deserialize, Serialize};

/// Client do Toggl
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

/// Payload de criação de client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub wid: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewClient {
    pub fn new(name: impl Into<String>, wid: u64) -> Self {
        Self {
            name: name.into(),
            wid,
            notes: None,
        }
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
