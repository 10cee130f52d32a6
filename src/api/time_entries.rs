//! Time entries
//!
//! Entradas criadas por este cliente levam `created_with` = [`USER_AGENT`].

use super::wrap;
use crate::client::{join_ids, to_params, ApiRequest, Params, TogglClient, USER_AGENT};
use crate::error::Result;
use crate::types::{TagAction, TimeEntry};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

impl TogglClient {
    /// Cria uma time entry concluída
    ///
    /// `start` e `duration` são obrigatórios; `start`/`stop` são normalizados
    /// para ISO 8601 com offset.
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/time_entries`
    ///
    /// # Exemplo
    ///
    /// ```rust,ignore
    /// use chrono::Utc;
    /// use toggl_client::NewTimeEntry;
    ///
    /// let entry = NewTimeEntry::new("Meeting with possible clients")
    ///     .project(193)
    ///     .finished(Utc::now(), 1200);
    /// let created = toggl.create_time_entry(&entry).await?;
    /// ```
    pub async fn create_time_entry<T: Serialize + ?Sized>(&self, data: &T) -> Result<TimeEntry> {
        let mut params = to_params(data)?;
        params.insert("created_with".to_string(), Value::from(USER_AGENT));
        self.validate_options("time-entry-create", &mut params)?;

        self.api_data(ApiRequest::post("/api/v8/time_entries").body(wrap("time_entry", params)))
            .await
    }

    /// Inicia um timer
    ///
    /// # Endpoint da API
    ///
    /// `POST /api/v8/time_entries/start`
    pub async fn start_time_entry<T: Serialize + ?Sized>(&self, data: &T) -> Result<TimeEntry> {
        let mut params = to_params(data)?;
        params.insert("created_with".to_string(), Value::from(USER_AGENT));

        tracing::info!("Starting time entry {:?}", params.get("description"));

        self.api_data(
            ApiRequest::post("/api/v8/time_entries/start").body(wrap("time_entry", params)),
        )
        .await
    }

    /// Para um timer em execução
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/time_entries/{id}/stop`
    pub async fn stop_time_entry(&self, time_entry_id: u64) -> Result<TimeEntry> {
        tracing::info!("Stopping time entry {}", time_entry_id);

        self.api_data(ApiRequest::put(format!(
            "/api/v8/time_entries/{}/stop",
            time_entry_id
        )))
        .await
    }

    /// Remove uma time entry
    pub async fn delete_time_entry(&self, time_entry_id: u64) -> Result<()> {
        self.api_empty(ApiRequest::delete(format!(
            "/api/v8/time_entries/{}",
            time_entry_id
        )))
        .await
    }

    /// Dados de uma time entry
    pub async fn get_time_entry_data(&self, time_entry_id: u64) -> Result<TimeEntry> {
        self.api_data(ApiRequest::get(format!(
            "/api/v8/time_entries/{}",
            time_entry_id
        )))
        .await
    }

    /// Timer em execução, se houver
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/time_entries/current`
    pub async fn get_current_time_entry(&self) -> Result<Option<TimeEntry>> {
        self.api_data(ApiRequest::get("/api/v8/time_entries/current"))
            .await
    }

    /// Time entries num intervalo
    ///
    /// Sem `start`/`end` a API retorna os últimos 9 dias.
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v8/time_entries?start_date=...&end_date=...`
    pub async fn get_time_entries(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<TimeEntry>> {
        let mut query = Params::new();
        if let Some(start) = start {
            query.insert("start_date".to_string(), Value::String(rfc3339(start)));
        }
        if let Some(end) = end {
            query.insert("end_date".to_string(), Value::String(rfc3339(end)));
        }
        self.validate_options("time-entry-get-timerange", &mut query)?;

        self.api_list(ApiRequest::get("/api/v8/time_entries").query(&query))
            .await
    }

    /// Atualiza uma time entry
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/time_entries/{id}`
    pub async fn update_time_entry<T: Serialize + ?Sized>(
        &self,
        time_entry_id: u64,
        data: &T,
    ) -> Result<TimeEntry> {
        let params = to_params(data)?;

        self.api_data(
            ApiRequest::put(format!("/api/v8/time_entries/{}", time_entry_id))
                .body(wrap("time_entry", params)),
        )
        .await
    }

    /// Adiciona ou remove tags de várias time entries
    ///
    /// # Endpoint da API
    ///
    /// `PUT /api/v8/time_entries/{id1,id2,...}`
    pub async fn update_time_entries_tags(
        &self,
        time_entry_ids: &[u64],
        tags: &[&str],
        action: TagAction,
    ) -> Result<Vec<TimeEntry>> {
        let mut params = Params::new();
        params.insert("tags".to_string(), Value::from(tags.to_vec()));
        params.insert("tag_action".to_string(), Value::from(action.as_str()));
        self.validate_options("time-entry-update-tags", &mut params)?;

        self.api_data(
            ApiRequest::put(format!("/api/v8/time_entries/{}", join_ids(time_entry_ids)))
                .body(wrap("time_entry", params)),
        )
        .await
    }

    /// Adiciona tags a várias time entries
    pub async fn add_time_entries_tags(
        &self,
        time_entry_ids: &[u64],
        tags: &[&str],
    ) -> Result<Vec<TimeEntry>> {
        self.update_time_entries_tags(time_entry_ids, tags, TagAction::Add)
            .await
    }

    /// Remove tags de várias time entries
    pub async fn remove_time_entries_tags(
        &self,
        time_entry_ids: &[u64],
        tags: &[&str],
    ) -> Result<Vec<TimeEntry>> {
        self.update_time_entries_tags(time_entry_ids, tags, TagAction::Remove)
            .await
    }
}

fn rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
