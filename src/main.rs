use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;
use toggl_client::config::Settings;
use toggl_client::utils::logging::{
    init_tracing, log_api_error, log_command_finished, log_command_started, log_config_loaded,
    log_warning,
};
use toggl_client::{
    ActiveFilter, Credentials, NewTimeEntry, ReportQuery, TogglClient, TogglError,
};

/// Toggl CLI - Interface de linha de comando para a API do Toggl
#[derive(Parser)]
#[command(name = "toggl")]
#[command(version)]
#[command(about = "CLI para a API do Toggl (v8 + Reports v2)", long_about = None)]
struct Cli {
    /// Token de API do Toggl (ou use TOGGL_API_TOKEN env var)
    #[arg(short = 't', long, env = "TOGGL_API_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// URL base da API (sobrescreve a configuração)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// URL base da Reports API (sobrescreve a configuração)
    #[arg(long, global = true)]
    reports_url: Option<String>,

    /// Formato de saída
    #[arg(short = 'o', long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Modo verbose para debug
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Comando a executar
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum ReportKind {
    Detailed,
    Summary,
    Weekly,
}

#[derive(Subcommand)]
enum Commands {
    /// Dados do usuário autenticado
    Me,

    /// Lista os workspaces
    Workspaces,

    /// Lista os projetos de um workspace
    Projects {
        #[arg(short = 'w', long)]
        workspace: u64,

        /// Inclui projetos arquivados
        #[arg(long)]
        all: bool,
    },

    /// Mostra o timer em execução
    Current,

    /// Inicia um timer
    Start {
        #[arg(short = 'd', long)]
        description: String,

        #[arg(short = 'p', long)]
        project: Option<u64>,

        #[arg(short = 'b', long)]
        billable: bool,
    },

    /// Para um timer
    Stop {
        /// ID da time entry
        id: u64,
    },

    /// Lista time entries (padrão da API: últimos 9 dias)
    Entries {
        /// Data inicial (YYYY-MM-DD)
        #[arg(long)]
        since: Option<NaiveDate>,

        /// Data final (YYYY-MM-DD)
        #[arg(long)]
        until: Option<NaiveDate>,
    },

    /// Gera um relatório
    Report {
        #[arg(value_enum)]
        kind: ReportKind,

        #[arg(short = 'w', long)]
        workspace: u64,

        #[arg(long)]
        since: Option<NaiveDate>,

        #[arg(long)]
        until: Option<NaiveDate>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Workspaces => "workspaces",
            Self::Projects { .. } => "projects",
            Self::Current => "current",
            Self::Start { .. } => "start",
            Self::Stop { .. } => "stop",
            Self::Entries { .. } => "entries",
            Self::Report { .. } => "report",
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match Settings::new() {
        Ok(settings) => {
            log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into()));
            settings
        }
        Err(e) => {
            log_warning(&format!("Configuration not loaded, using defaults: {}", e));
            Settings::default()
        }
    };

    let output = cli.output.unwrap_or(if settings.output.pretty {
        OutputFormat::Pretty
    } else {
        OutputFormat::Json
    });

    let command = cli.command.name();
    let started = Instant::now();
    log_command_started(command);

    match execute_command(&cli, settings).await {
        Ok(data) => {
            log_command_finished(command, started.elapsed().as_millis());
            if let Err(e) = print_output(&data, output) {
                eprintln!("❌ Erro: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            if let Some(toggl_error) = e.downcast_ref::<TogglError>() {
                log_api_error(command, toggl_error.status(), &toggl_error.to_string());
            }
            eprintln!("❌ Erro: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<Value> {
    let client = build_client(cli, settings).await?;

    let data = match &cli.command {
        Commands::Me => to_value(client.get_user_data(&json!({})).await?)?,

        Commands::Workspaces => to_value(client.get_workspaces().await?)?,

        Commands::Projects { workspace, all } => {
            let active = if *all { ActiveFilter::Both } else { ActiveFilter::Active };
            to_value(
                client
                    .get_workspace_projects(*workspace, &json!({ "active": active }))
                    .await?,
            )?
        }

        Commands::Current => to_value(client.get_current_time_entry().await?)?,

        Commands::Start {
            description,
            project,
            billable,
        } => {
            let mut entry = NewTimeEntry::new(description.clone());
            if let Some(project) = project {
                entry = entry.project(*project);
            }
            if *billable {
                entry = entry.billable(true);
            }
            to_value(client.start_time_entry(&entry).await?)?
        }

        Commands::Stop { id } => to_value(client.stop_time_entry(*id).await?)?,

        Commands::Entries { since, until } => {
            let start = since.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|d| d.and_utc());
            let end = until.and_then(|d| d.and_hms_opt(23, 59, 59)).map(|d| d.and_utc());
            to_value(client.get_time_entries(start, end).await?)?
        }

        Commands::Report {
            kind,
            workspace,
            since,
            until,
        } => {
            let mut query = ReportQuery::new(*workspace);
            query.since = *since;
            query.until = *until;

            match kind {
                ReportKind::Detailed => to_value(client.detailed_report(&query).await?)?,
                ReportKind::Summary => to_value(client.summary_report(&query).await?)?,
                ReportKind::Weekly => {
                    // weekly não aceita `until`
                    query.until = None;
                    to_value(client.weekly_report(&query).await?)?
                }
            }
        }
    };

    client.destroy();

    Ok(data)
}

/// Monta o cliente: flags da CLI > variáveis de ambiente > arquivos de configuração
async fn build_client(cli: &Cli, mut settings: Settings) -> anyhow::Result<TogglClient> {
    if let Some(token) = &cli.token {
        settings.toggl.api_token = Some(token.clone());
    }
    if let Some(api_url) = &cli.api_url {
        settings.toggl.api_url = api_url.clone();
    }
    if let Some(reports_url) = &cli.reports_url {
        settings.toggl.reports_url = reports_url.clone();
    }

    let options = settings.toggl.client_options();
    if options.credentials.is_none() {
        return Err(anyhow!(
            "Configure TOGGL_API_TOKEN (ou TOGGL_USERNAME e TOGGL_PASSWORD)"
        ));
    }

    let client = TogglClient::new(options).context("Falha ao criar o cliente Toggl")?;

    if matches!(client.credentials(), Some(Credentials::Password { .. })) {
        client
            .authenticate()
            .await
            .context("Falha na autenticação")?;
    }

    Ok(client)
}

fn to_value<T: Serialize>(data: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(data)?)
}

fn print_output(data: &Value, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(data)?),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(data)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_report() {
        let cli = Cli::try_parse_from([
            "toggl", "report", "summary", "--workspace", "777", "--since", "2024-01-01",
        ])
        .unwrap();

        match cli.command {
            Commands::Report {
                kind,
                workspace,
                since,
                until,
            } => {
                assert_eq!(kind, ReportKind::Summary);
                assert_eq!(workspace, 777);
                assert_eq!(since, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert!(until.is_none());
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_cli_parses_start() {
        let cli = Cli::try_parse_from([
            "toggl", "-o", "pretty", "start", "-d", "Code review", "--project", "193", "--billable",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Pretty));
        assert_eq!(cli.command.name(), "start");
    }
}
