//! Configuration management

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_SNAPSHOT_PATH, DEFAULT_UNKNOWN_USER_LABEL,
    DEFAULT_UNNAMED_TASK_LABEL,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub ledger: LedgerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerSettings {
    /// JSON snapshot backing the in-memory repositories
    pub snapshot_path: String,
    pub history_limit: usize,
    pub unnamed_task_label: String,
    pub unknown_user_label: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    /// Daily-rolling log files are written here when set
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &env)
    }

    /// Layers `default` and `{env}` files from `dir` over built-in defaults,
    /// then `CHORE_SECTION__KEY` environment variables on top.
    pub fn load_from(dir: &Path, env: &str) -> Result<Self, ConfigError> {
        let default_file = dir.join("default");
        let env_file = dir.join(env);

        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", "chore-ledger")?
            .set_default("ledger.snapshot_path", DEFAULT_SNAPSHOT_PATH)?
            .set_default("ledger.history_limit", DEFAULT_HISTORY_LIMIT as i64)?
            .set_default("ledger.unnamed_task_label", DEFAULT_UNNAMED_TASK_LABEL)?
            .set_default("ledger.unknown_user_label", DEFAULT_UNKNOWN_USER_LABEL)?
            .set_default("log.level", "info")?
            .set_default("log.json", false)?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix("CHORE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
