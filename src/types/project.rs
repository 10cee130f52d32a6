//! Projetos e usuários de projeto

use serde::{Deserialize, Serialize};
use std::fmt;

/// Projeto do Toggl
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,

    /// Client do projeto
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_estimates: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    /// Índice da cor (string numérica na API)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload de criação de projeto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub wid: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_estimates: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, wid: u64) -> Self {
        Self {
            name: name.into(),
            wid,
            cid: None,
            template_id: None,
            is_private: None,
            active: None,
            billable: None,
            auto_estimates: None,
            estimated_hours: None,
            color: None,
            rate: None,
        }
    }

    pub fn client(mut self, cid: u64) -> Self {
        self.cid = Some(cid);
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }
}

/// Vínculo usuário-projeto
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectUser {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// Preenchido quando `fields=fullname` é pedido
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

/// Filtro de projetos/tarefas por estado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveFilter {
    #[default]
    #[serde(rename = "true")]
    Active,
    #[serde(rename = "false")]
    Archived,
    #[serde(rename = "both")]
    Both,
}

impl ActiveFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "true",
            Self::Archived => "false",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
