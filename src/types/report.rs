//! Tipos da Reports API v2

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parâmetros comuns dos relatórios
///
/// Listas de IDs são enviadas como valores separados por vírgula. Campos
/// ausentes ficam com os defaults da API (`since` = 6 dias atrás,
/// `until` = hoje).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    pub workspace_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<NaiveDate>,

    /// `yes`, `no` ou `both`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub client_ids: Vec<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub task_ids: Vec<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<String>,

    /// `on` ou `off`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_desc: Option<String>,

    /// `decimal` ou `minutes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_hours: Option<String>,

    /// Agrupamento (summary/weekly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,

    /// Subagrupamento (summary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgrouping: Option<String>,

    /// `time` ou `earnings` (weekly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculate: Option<String>,

    /// Página (detailed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ReportQuery {
    pub fn new(workspace_id: u64) -> Self {
        Self {
            workspace_id,
            ..Default::default()
        }
    }

    pub fn since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    pub fn until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    pub fn projects(mut self, ids: &[u64]) -> Self {
        self.project_ids = ids.to_vec();
        self
    }

    pub fn grouping(mut self, grouping: impl Into<String>) -> Self {
        self.grouping = Some(grouping.into());
        self
    }

    pub fn subgrouping(mut self, subgrouping: impl Into<String>) -> Self {
        self.subgrouping = Some(subgrouping.into());
        self
    }
}

/// Relatório detalhado (`/api/v2/details`), paginado
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailedReport {
    #[serde(default)]
    pub total_grand: Option<i64>,

    #[serde(default)]
    pub total_billable: Option<i64>,

    #[serde(default)]
    pub total_count: Option<u64>,

    #[serde(default)]
    pub per_page: Option<u64>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_currencies: Vec<Value>,

    /// Time entries da página
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub data: Vec<Value>,
}

/// Relatório resumido (`/api/v2/summary`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryReport {
    #[serde(default)]
    pub total_grand: Option<i64>,

    #[serde(default)]
    pub total_billable: Option<i64>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_currencies: Vec<Value>,

    /// Grupos com `title`, `time` e `items`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub data: Vec<Value>,
}

/// Relatório semanal (`/api/v2/weekly`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyReport {
    #[serde(default)]
    pub total_grand: Option<i64>,

    #[serde(default)]
    pub total_billable: Option<i64>,

    /// Totais por dia da semana (7 posições + total)
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub week_totals: Vec<Option<i64>>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub data: Vec<Value>,
}
