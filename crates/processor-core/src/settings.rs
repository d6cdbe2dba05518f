use crate::theme::ThemeVariant;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "data-processor.toml";
pub const ENV_PREFIX: &str = "DATA_PROCESSOR_";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/bfhl/bajaj";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Endpoint every validated request is posted to.
    pub endpoint: String,
    pub theme: ThemeVariant,
    pub log_file: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: ThemeVariant::default(),
            log_file: "data-processor.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `data-processor.toml`, then `DATA_PROCESSOR_*` variables.
    pub fn new() -> Result<Self, SettingsError> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::figment(path.as_ref())
            .extract()
            .map_err(|e| SettingsError::Load(Box::new(e)))
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(CONFIG_FILE)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }
}
