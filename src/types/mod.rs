//! Tipos da API do Toggl
//!
//! Estruturas de resposta (todas tolerantes a campos ausentes) e payloads de
//! requisição tipados. Os métodos de [`crate::TogglClient`] aceitam qualquer
//! `Serialize` como payload, então `serde_json::json!` também funciona.
//!
//! ## Notas
//!
//! - **IDs**: sempre numéricos (`u64`)
//! - **Datas**: ISO 8601; `start`/`stop` de time entries em [`chrono::DateTime`]
//! - **Duração**: segundos; negativa enquanto o timer está rodando

pub mod client;
pub mod project;
pub mod report;
pub mod tag;
pub mod task;
pub mod time_entry;
pub mod user;
pub mod workspace;

pub use client::{Client, NewClient};
pub use project::{ActiveFilter, NewProject, Project, ProjectUser};
pub use report::{DetailedReport, ReportQuery, SummaryReport, WeeklyReport};
pub use tag::Tag;
pub use task::Task;
pub use time_entry::{NewTimeEntry, TagAction, TimeEntry};
pub use user::{User, UserUpdate};
pub use workspace::{Dashboard, InviteResponse, Workspace, WorkspaceUser, WorkspaceUsers};

use serde::{Deserialize, Deserializer};

/// Listas que a API v8 devolve como `null` quando vazias
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

