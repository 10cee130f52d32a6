//! Tarefas de projeto (recurso de workspaces pagos)

use serde::{Deserialize, Serialize};

/// Tarefa do Toggl
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Projeto da tarefa
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,

    /// Responsável
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_seconds: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_seconds: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}
