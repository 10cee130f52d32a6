//! Tipos relacionados ao usuário autenticado (`/api/v8/me`)

use super::{Client, Project, Tag, Task, TimeEntry, Workspace};
use serde::{Deserialize, Serialize};

/// Usuário do Toggl
///
/// Com `with_related_data=true` a API também devolve workspaces, clients,
/// projects, tasks, tags e time entries do usuário.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Workspace padrão
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_wid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,

    /// 0 = domingo ... 6 = sábado
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning_of_week: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeofday_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_start_and_stop_time: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_product_emails: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_timer_notifications: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_weekly_report: Option<bool>,

    /// Última alteração
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspaces: Option<Vec<Workspace>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<Client>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_entries: Option<Vec<TimeEntry>>,
}

/// Campos atualizáveis do usuário (`PUT /api/v8/me`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_product_emails: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_weekly_report: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_timer_notifications: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_start_and_stop_time: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning_of_week: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// `"H:mm"` ou `"h:mm A"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeofday_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}
