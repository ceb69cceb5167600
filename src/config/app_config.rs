use serde::Deserialize;

use crate::domain::credibility::CredibilityConfig;
use crate::domain::verdict::VerdictConfig;
use crate::domain::DomainError;
use crate::infrastructure::evidence::ProvidersConfig;
use crate::infrastructure::fact_check::EngineConfig;
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub verdict: VerdictConfig,
    #[serde(default)]
    pub credibility: CredibilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/default`, then `config/local`, then `APP__*` variables.
    ///
    /// Google credentials missing from all three are read from
    /// `GOOGLE_API_KEY` / `GOOGLE_CX_ID`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        app_config.providers = app_config
            .providers
            .with_env_fallback(|key| std::env::var(key).ok());

        Ok(app_config)
    }

    /// Check the engine and scoring sections
    pub fn validate(&self) -> Result<(), DomainError> {
        self.engine.validate()?;
        self.verdict.validate()?;

        for (domain, weight) in &self.credibility.domains {
            if !(0.0..=1.0).contains(weight) {
                return Err(DomainError::configuration(format!(
                    "credibility weight for {} must be within [0, 1], got {}",
                    domain, weight
                )));
            }
        }

        Ok(())
    }
}
