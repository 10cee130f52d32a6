use crate::client::{ClientOptions, Credentials, TogglClient};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub toggl: TogglSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TogglSettings {
    pub api_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_reports_url")]
    pub reports_url: String,
    #[serde(default)]
    pub reauth: bool,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OutputSettings {
    /// JSON indentado em vez de uma linha
    #[serde(default)]
    pub pretty: bool,
}

fn default_api_url() -> String {
    ClientOptions::default().api_url
}

fn default_reports_url() -> String {
    ClientOptions::default().reports_url
}

fn default_timeout_seconds() -> u64 {
    ClientOptions::default().timeout.as_secs()
}

impl Default for TogglSettings {
    fn default() -> Self {
        Self {
            api_token: None,
            username: None,
            password: None,
            api_url: default_api_url(),
            reports_url: default_reports_url(),
            reauth: false,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        Self::build(builder)
    }

    /// Carrega somente a partir de um documento YAML, sem variáveis de ambiente
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    fn build(
        mut builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        // Variáveis de ambiente específicas
        if let Ok(token) = std::env::var("TOGGL_API_TOKEN") {
            builder = builder.set_override("toggl.api_token", token)?;
        }
        if let Ok(username) = std::env::var("TOGGL_USERNAME") {
            builder = builder.set_override("toggl.username", username)?;
        }
        if let Ok(password) = std::env::var("TOGGL_PASSWORD") {
            builder = builder.set_override("toggl.password", password)?;
        }
        if let Ok(api_url) = std::env::var("TOGGL_API_URL") {
            builder = builder.set_override("toggl.api_url", api_url)?;
        }

        // TOGGL__OUTPUT__PRETTY=true, etc.
        builder = builder.add_source(Environment::with_prefix("TOGGL").separator("__"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}

impl TogglSettings {
    /// Credenciais configuradas: token tem prioridade sobre usuário/senha
    pub fn credentials(&self) -> Option<Credentials> {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        if let Some(token) = non_empty(&self.api_token) {
            return Some(Credentials::ApiToken(token));
        }

        match (non_empty(&self.username), non_empty(&self.password)) {
            (Some(username), Some(password)) => Some(Credentials::Password { username, password }),
            _ => None,
        }
    }

    /// Opções do cliente a partir dos defaults globais
    pub fn client_options(&self) -> ClientOptions {
        let timeout = Duration::from_secs(self.timeout_seconds);
        let defaults = TogglClient::defaults();

        ClientOptions {
            credentials: self.credentials(),
            ..defaults.clone()
        }
        .with_reauth(self.reauth)
        .with_api_url(self.api_url.clone())
        .with_reports_url(self.reports_url.clone())
        .with_timeouts(timeout, defaults.connect_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_yaml() {
        let settings = Settings::from_yaml(
            r#"
toggl:
  username: "john@example.com"
  password: "secret"
  reauth: true
  timeout_seconds: 10
output:
  pretty: true
"#,
        )
        .unwrap();

        assert_eq!(settings.toggl.api_url, "https://www.toggl.com");
        assert!(settings.toggl.reauth);
        assert!(settings.output.pretty);

        let options = settings.toggl.client_options();
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert!(options.reauth);
    }

    #[test]
    fn test_from_yaml_ignores_environment() {
        std::env::set_var("TOGGL_API_URL", "http://localhost:9999");
        let settings = Settings::from_yaml("toggl:\n  reauth: true\n");
        std::env::remove_var("TOGGL_API_URL");

        assert_eq!(settings.unwrap().toggl.api_url, "https://www.toggl.com");
    }

    #[test]
    fn test_token_takes_precedence() {
        let settings = TogglSettings {
            api_token: Some("token".to_string()),
            username: Some("john@example.com".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        assert_eq!(
            settings.credentials(),
            Some(Credentials::ApiToken("token".to_string()))
        );
    }

    #[test]
    fn test_incomplete_credentials() {
        let settings = TogglSettings {
            username: Some("john@example.com".to_string()),
            ..Default::default()
        };
        assert!(settings.credentials().is_none());

        let settings = TogglSettings {
            api_token: Some(String::new()),
            ..Default::default()
        };
        assert!(settings.credentials().is_none());
    }
}
