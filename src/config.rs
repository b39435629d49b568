//! Purpose: Process-wide application settings (name, description, base URL).
//! Exports: `AppConfig`, `APP_NAME_VAR`, `APP_DESCRIPTION_VAR`, `APP_URL_VAR`.
//! Role: Load-once constants shared by helpers and the CLI.
//! Invariants: `app_url` is an absolute http(s) URL without a trailing slash.
//! Invariants: Empty environment values count as unset; `global()` never fails.
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::error::{Error, ErrorKind};
use crate::utils::validation::is_valid_url;

pub const APP_NAME_VAR: &str = "BUNPLATE_APP_NAME";
pub const APP_DESCRIPTION_VAR: &str = "BUNPLATE_APP_DESCRIPTION";
pub const APP_URL_VAR: &str = "BUNPLATE_APP_URL";

const DEFAULT_APP_NAME: &str = "BunPlate";
const DEFAULT_APP_DESCRIPTION: &str = "A clean, minimal web application";
const DEFAULT_APP_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_description: String,
    pub app_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            app_description: DEFAULT_APP_DESCRIPTION.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults per key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let app_url = match read(APP_URL_VAR) {
            Some(raw) => {
                if !is_valid_url(&raw) {
                    return Err(Error::new(ErrorKind::Config)
                        .with_message(format!("{APP_URL_VAR} is not an http(s) URL: {raw:?}"))
                        .with_hint(format!("Set {APP_URL_VAR} like {DEFAULT_APP_URL}.")));
                }
                raw.trim_end_matches('/').to_string()
            }
            None => defaults.app_url,
        };

        Ok(Self {
            app_name: read(APP_NAME_VAR).unwrap_or(defaults.app_name),
            app_description: read(APP_DESCRIPTION_VAR).unwrap_or(defaults.app_description),
            app_url,
        })
    }

    /// Loaded from the environment on first use; invalid settings fall back to defaults.
    pub fn global() -> &'static AppConfig {
        static GLOBAL: OnceLock<AppConfig> = OnceLock::new();
        GLOBAL.get_or_init(|| match Self::from_env() {
            Ok(config) => {
                debug!(app_name = %config.app_name, app_url = %config.app_url, "app config loaded");
                config
            }
            Err(err) => {
                warn!(error = %err, "invalid app config; using defaults");
                Self::default()
            }
        })
    }
}
