use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Inicializa o subscriber de logs
///
/// `RUST_LOG` tem prioridade; sem ele usa `info` (ou `debug` com `verbose`).
/// Chamadas repetidas são ignoradas.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_command_started(command: &str) {
    debug!("Running command: {}", command);
}

pub fn log_command_finished(command: &str, duration_ms: u128) {
    debug!("Command {} finished in {}ms", command, duration_ms);
}

pub fn log_api_error(command: &str, status: Option<u16>, error: &str) {
    error!("Toggl API error: {} - Status: {:?} - Error: {}", command, status, error);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        log_warning("still works");
    }
}
