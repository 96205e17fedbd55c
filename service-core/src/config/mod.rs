use crate::error::AppError;
use config::{builder::DefaultState, Config as Cfg, ConfigBuilder, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load the shared settings.
    ///
    /// Sources, lowest precedence first: `configuration.{toml,yaml,json}`,
    /// `APP__*` variables, then the bare `PORT` and `LOG_LEVEL` variables.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let sources = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        Self::resolve(sources, env::var("PORT").ok(), env::var("LOG_LEVEL").ok())
    }

    fn resolve(
        sources: ConfigBuilder<DefaultState>,
        port: Option<String>,
        log_level: Option<String>,
    ) -> Result<Self, AppError> {
        let config = sources
            .set_override_option("port", port)?
            .set_override_option("log_level", log_level)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
