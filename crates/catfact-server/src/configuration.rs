use crate::error::{to_env_var, ConfigError, ENV_PREFIX};
use catfact::facts::configs::{CatFactConfig, CATFACT_FIELD, CATFACT_TIMEOUT, CATFACT_URL};
use catfact::profile::UserProfile;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::lookup_host;

// Optional settings file, resolved relative to the working directory
const SETTINGS_FILE: &str = "catfact";

// Keys with no default; they must be set in the file or the environment
const REQUIRED_KEYS: [&str; 3] = ["user.email", "user.name", "user.stack"];

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Resolve `host:port` to the first matching address. The host may be an
    /// IP literal (including bare IPv6 like `::1`) or a name such as `localhost`.
    pub async fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = || ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port));

        let mut addrs = lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| {
                tracing::debug!("Failed to resolve {}: {}", self.host, e);
                invalid()
            })?;
        addrs.next().ok_or_else(invalid)
    }
}

#[derive(Debug, Deserialize)]
pub struct FactSettings {
    #[serde(default = "default_fact_url")]
    pub url: String,
    #[serde(default = "default_fact_field")]
    pub field: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FactSettings {
    fn default() -> Self {
        Self {
            url: default_fact_url(),
            field: default_fact_field(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FactSettings {
    pub fn into_config(self) -> CatFactConfig {
        CatFactConfig {
            url: self.url,
            field: self.field,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub user: UserProfile,
    #[serde(default)]
    pub facts: FactSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate(SETTINGS_FILE)
    }

    fn load_and_validate(settings_file: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("facts.url", default_fact_url())?
            .set_default("facts.field", default_fact_field())?
            .set_default("facts.timeout_secs", default_timeout_secs())?
            // Layer on an optional catfact.toml, then the environment variables
            .add_source(File::with_name(settings_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        for key in REQUIRED_KEYS {
            match config.get_string(key) {
                Ok(_) => {}
                Err(config::ConfigError::NotFound(_)) => {
                    return Err(ConfigError::MissingEnvVar {
                        env_var: to_env_var(key),
                    })
                }
                Err(err) => return Err(ConfigError::Other(err)),
            }
        }

        let result: Result<Self, config::ConfigError> = config.try_deserialize();

        match result {
            Ok(settings) => Ok(settings),
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);

                if let config::ConfigError::NotFound(field) = &err {
                    Err(ConfigError::MissingEnvVar {
                        env_var: to_env_var(field),
                    })
                } else {
                    Err(ConfigError::Other(err))
                }
            }
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_fact_url() -> String {
    CATFACT_URL.to_string()
}

fn default_fact_field() -> String {
    CATFACT_FIELD.to_string()
}

fn default_timeout_secs() -> u64 {
    CATFACT_TIMEOUT.as_secs()
}
