//! Cliente da API do Toggl
//!
//! Este crate mapeia a API REST do Toggl (v8) e a Reports API (v2) em métodos
//! assíncronos de [`TogglClient`]:
//!
//! - **Clients, projetos, tarefas, tags**: CRUD completo
//! - **Time entries**: criação, timer (start/stop), tags em lote
//! - **Workspaces**: dados, listagens, usuários e convites
//! - **Usuário**: dados, senha, token, cadastro
//! - **Relatórios**: detailed, summary e weekly
//!
//! # Autenticação
//!
//! - **API token** (recomendado): HTTP basic auth em cada requisição; único
//!   modo aceito pela Reports API.
//! - **Usuário/senha**: [`TogglClient::authenticate`] abre uma sessão por
//!   cookie. Com `reauth` ligado a sessão é renovada automaticamente antes de
//!   expirar; chame [`TogglClient::destroy`] para cancelar a renovação.
//!
//! # Validação
//!
//! Opções de entrada passam por esquemas declarativos (ver [`validator`]):
//! chaves camelCase viram snake_case, defaults são aplicados e datas
//! normalizadas antes do envio.
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use toggl_client::{NewTimeEntry, TogglClient};
//!
//! #[tokio::main]
//! async fn main() -> toggl_client::Result<()> {
//!     let api_token = std::env::var("TOGGL_API_TOKEN")
//!         .expect("TOGGL_API_TOKEN não configurado");
//!
//!     let toggl = TogglClient::with_api_token(api_token)?;
//!
//!     let entry = toggl
//!         .start_time_entry(&NewTimeEntry::new("Code review"))
//!         .await?;
//!     toggl.stop_time_entry(entry.id.unwrap_or_default()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;
pub mod validator;

pub use client::{ClientOptions, Credentials, Params, TogglClient, USER_AGENT};
pub use error::{Result, TogglError};
pub use types::{
    ActiveFilter, Client, Dashboard, DetailedReport, InviteResponse, NewClient, NewProject,
    NewTimeEntry, Project, ProjectUser, ReportQuery, SummaryReport, Tag, TagAction, Task,
    TimeEntry, User, UserUpdate, WeeklyReport, Workspace, WorkspaceUser, WorkspaceUsers,
};
