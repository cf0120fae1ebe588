//! Application configuration module
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables. The resulting [`AppConfig`] is validated once
//! at startup and handed to the server as immutable state.
//!
//! ```toml
//! secret = "change-me"
//! environment = "test"
//! allow_test_login = true
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! public_url = "https://comments.example.org"
//!
//! [database]
//! url = "sqlite://some-comments.db"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://some-comments.db";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Shared secret used to sign session and unsubscribe tokens
    pub secret: String,
    /// sqlx connection URL of the SQLite database
    pub database_url: String,
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Externally visible base URL, used when building unsubscribe links
    pub public_url: Option<String>,
    /// Free-form environment name, reported in the startup log line
    pub environment: String,
    /// Enables `GET /login/{id}`, which hands out a session without credentials
    pub allow_test_login: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            allow_test_login: false,
        }
    }
}

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    secret: Option<String>,
    environment: Option<String>,
    allow_test_login: Option<bool>,
    server: ServerSection,
    database: DatabaseSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
    public_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DatabaseSection {
    url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from an optional TOML file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse TOML text on top of the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        let mut config = Self::default();

        if let Some(secret) = file.secret {
            config.secret = secret;
        }
        if let Some(environment) = file.environment {
            config.environment = environment;
        }
        if let Some(allow) = file.allow_test_login {
            config.allow_test_login = allow;
        }
        if let Some(host) = file.server.host {
            config.host = host;
        }
        if let Some(port) = file.server.port {
            config.port = port;
        }
        if file.server.public_url.is_some() {
            config.public_url = file.server.public_url;
        }
        if let Some(url) = file.database.url {
            config.database_url = url;
        }

        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables
    ///
    /// Recognised variables: `SOME_COMMENTS_SECRET` (falls back to
    /// `JWT_SECRET`), `DATABASE_URL`, `SERVER_HOST`, `SERVER_PORT`,
    /// `PUBLIC_URL`, `APP_ENV` and `ALLOW_TEST_LOGIN`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("SOME_COMMENTS_SECRET").or_else(|| lookup("JWT_SECRET")) {
            self.secret = secret;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port,
            })?;
        }
        if let Some(url) = lookup("PUBLIC_URL") {
            self.public_url = Some(url);
        }
        if let Some(environment) = lookup("APP_ENV") {
            self.environment = environment;
        }
        if let Some(allow) = lookup("ALLOW_TEST_LOGIN") {
            self.allow_test_login = parse_bool("ALLOW_TEST_LOGIN", allow)?;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("secret"));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("database.url"));
        }
        if let Some(url) = &self.public_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }

    /// Base URL used in links sent to users, without a trailing slash
    pub fn public_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the signing secret
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.config.secret = secret.into();
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the public base URL
    pub fn public_url(mut self, url: impl Into<String>) -> Self {
        self.config.public_url = Some(url.into());
        self
    }

    /// Set the environment name
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.config.environment = environment.into();
        self
    }

    /// Toggle the credential-less login route
    pub fn allow_test_login(mut self, allow: bool) -> Self {
        self.config.allow_test_login = allow;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
