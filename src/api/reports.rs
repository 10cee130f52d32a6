//! Reports API v2
//!
//! Exige token de API. As opções seguem a documentação da Reports API;
//! `since` e `until` aceitam datas em qualquer formato reconhecido e são
//! enviadas como `YYYY-MM-DD`. Listas de IDs vão separadas por vírgula.

use crate::client::{to_params, TogglClient};
use crate::error::Result;
use crate::types::{DetailedReport, SummaryReport, WeeklyReport};
use crate::validator;
use serde::Serialize;

impl TogglClient {
    /// Relatório detalhado (time entries paginadas)
    ///
    /// # Endpoint da API
    ///
    /// `GET {reports_url}/api/v2/details`
    ///
    /// # Exemplo
    ///
    /// ```rust,ignore
    /// use toggl_client::ReportQuery;
    ///
    /// let report = toggl.detailed_report(&ReportQuery::new(777)).await?;
    /// println!("{:?} entries", report.total_count);
    /// ```
    pub async fn detailed_report<T: Serialize + ?Sized>(&self, options: &T) -> Result<DetailedReport> {
        let mut query = to_params(options)?;
        self.validate_options("report-detailed", &mut query)?;

        self.reports_request("/api/v2/details", &query).await
    }

    /// Relatório resumido, agrupado
    ///
    /// `subgrouping` precisa ser compatível com `grouping`: `projects` aceita
    /// `time_entries`, `tasks` e `users`; `clients` aceita também `projects`;
    /// `users` aceita `time_entries`, `tasks`, `projects` e `clients`.
    ///
    /// # Endpoint da API
    ///
    /// `GET {reports_url}/api/v2/summary`
    pub async fn summary_report<T: Serialize + ?Sized>(&self, options: &T) -> Result<SummaryReport> {
        let mut query = to_params(options)?;
        self.validate_options("report-summary", &mut query)?;
        validator::check_summary_grouping(&query)?;

        self.reports_request("/api/v2/summary", &query).await
    }

    /// Relatório semanal
    ///
    /// # Endpoint da API
    ///
    /// `GET {reports_url}/api/v2/weekly`
    pub async fn weekly_report<T: Serialize + ?Sized>(&self, options: &T) -> Result<WeeklyReport> {
        let mut query = to_params(options)?;
        self.validate_options("report-weekly", &mut query)?;

        self.reports_request("/api/v2/weekly", &query).await
    }
}
