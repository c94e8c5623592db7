use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConnectorSettings {
    /// Name shown by extensions in their authorization prompt
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Global object extensions inject themselves into
    #[serde(default = "default_injected_marker")]
    pub injected_marker: String,
    #[serde(default = "default_auto_select_first")]
    pub auto_select_first: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ConnectorSettings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            injected_marker: default_injected_marker(),
            auto_select_first: default_auto_select_first(),
            log_level: default_log_level(),
        }
    }
}

impl ConnectorSettings {
    #[cfg(feature = "native")]
    pub fn from_file(path: &str) -> Result<Self, CoreError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(path));
        let cfg = builder.build()?;
        let settings: Self = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    #[cfg(feature = "native")]
    pub fn save_to_file(&self, path: &str) -> Result<(), CoreError> {
        let toml_string = toml::to_string(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Parse settings handed over from JavaScript as a JSON string.
    /// Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String, CoreError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.app_name.trim().is_empty() {
            return Err(CoreError::Validation("app_name must not be empty".to_string()));
        }
        if self.injected_marker.trim().is_empty() {
            return Err(CoreError::Validation("injected_marker must not be empty".to_string()));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<log::Level, CoreError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| CoreError::Validation(format!("unknown log level: {}", self.log_level)))
    }
}

fn default_app_name() -> String { "dotwallet".to_string() }
fn default_injected_marker() -> String { "injectedWeb3".to_string() }
fn default_auto_select_first() -> bool { true }
fn default_log_level() -> String { "info".to_string() }
