use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
    #[serde(default)]
    pub icebreaker: IcebreakerConfig,
    #[serde(default)]
    pub serpapi: SerpApiConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    #[serde(default = "default_uploads_dir")]
    pub dir: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
        }
    }
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct IcebreakerConfig {
    /// Empty disables the remote generator.
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for IcebreakerConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SerpApiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_num_events")]
    pub num_events: usize,
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            location: default_location(),
            num_events: default_num_events(),
        }
    }
}

fn default_location() -> String {
    "Bangalore".to_string()
}

fn default_num_events() -> usize {
    20
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, OPENAI_API_KEY, SERPAPI_API_KEY)
    /// 2. Environment variables (MOODMEET__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite:moodmeet.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MOODMEET")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(openai_api_key) = env::var("OPENAI_API_KEY") {
            builder = builder.set_override("icebreaker.openai_api_key", openai_api_key)?;
        }
        if let Ok(serpapi_api_key) = env::var("SERPAPI_API_KEY") {
            builder = builder.set_override("serpapi.api_key", serpapi_api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.uploads.dir.trim().is_empty() {
            return Err("Uploads directory must not be empty".to_string());
        }
        Ok(())
    }
}
