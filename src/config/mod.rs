//! Settings for the screening service and CLI, read from `.env` and `APP_*` variables.

use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};

use crate::screening::RoleProfile;

/// Deployment stage. Production switches the default log format to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    fn from_env() -> Self {
        Self::parse(&var_or("APP_ENV", "development"))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub screening: ScreeningConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_env();
        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig::from_env(environment)?,
            screening: ScreeningConfig::from_env(),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// HTTP binding for `serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Self {
            host: var_or("APP_HOST", "127.0.0.1"),
            port,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Line format for log events written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    pub log_level: String,
    pub format: LogFormat,
}

impl TelemetryConfig {
    fn from_env(environment: AppEnvironment) -> Result<Self, ConfigError> {
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(value) => LogFormat::parse(&value)?,
            Err(_) if environment == AppEnvironment::Production => LogFormat::Json,
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            log_level: var_or("APP_LOG_LEVEL", "info"),
            format,
        })
    }
}

/// Screening defaults applied when a caller omits the role.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    pub default_role: String,
}

impl ScreeningConfig {
    // Unregistered roles are kept as given; they score with the general rubric.
    fn from_env() -> Self {
        let default_role = env::var("APP_DEFAULT_ROLE")
            .map(|role| role.trim().to_string())
            .ok()
            .filter(|role| !role.is_empty())
            .unwrap_or_else(|| RoleProfile::General.key().to_string());

        Self { default_role }
    }

    /// Rubric profile the default role resolves to.
    pub fn role(&self) -> RoleProfile {
        RoleProfile::resolve(&self.default_role)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: AddrParseError,
    },
    #[error("APP_LOG_FORMAT must be 'compact' or 'json', got '{value}'")]
    InvalidLogFormat { value: String },
}
