//! Shared configuration for sitestats hosts.
//!
//! TOML settings layered with environment overrides, translation to
//! `sitestats_core::StoreSettings`, and the label [`Catalog`] used to
//! render block text.

mod catalog;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use sitestats_core::{CachePolicyKind, LabelId, StoreSettings};

pub use catalog::{Catalog, LabelText};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Fetch and cache defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Label overrides keyed by resource name
    /// (e.g. `stats_insights_view_more`).
    #[serde(default)]
    pub labels: BTreeMap<String, LabelText>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// When a block with a published value fetches again.
    #[serde(default)]
    pub refresh: CachePolicyKind,

    /// Seconds a cached page is served without a network round-trip.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Display cap applied by the store.
    #[serde(default = "default_max_groups")]
    pub max_groups: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            refresh: CachePolicyKind::default(),
            cache_ttl_secs: default_cache_ttl(),
            max_groups: default_max_groups(),
        }
    }
}

fn default_cache_ttl() -> u64 {
    300
}
fn default_max_groups() -> usize {
    6
}

impl Config {
    /// Translate the defaults into the core's runtime store settings.
    pub fn store_settings(&self) -> Result<StoreSettings, ConfigError> {
        if self.defaults.max_groups == 0 {
            return Err(ConfigError::Validation {
                field: "defaults.max_groups".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(StoreSettings {
            ttl: Duration::from_secs(self.defaults.cache_ttl_secs),
            max_groups: self.defaults.max_groups,
        })
    }

    pub fn cache_policy(&self) -> CachePolicyKind {
        self.defaults.refresh
    }

    /// Built-in English labels with this config's overrides applied.
    /// Keys that name no known label are skipped with a warning.
    pub fn catalog(&self) -> Catalog {
        let overrides = self.labels.iter().filter_map(|(key, text)| {
            if let Ok(id) = key.parse::<LabelId>() {
                Some((id, text.clone()))
            } else {
                warn!(key, "ignoring unknown label override");
                None
            }
        });
        Catalog::english().with_overrides(overrides)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "sitestats", "sitestats").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("sitestats");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// Environment variables use the `SITESTATS_` prefix with `__` as the
/// nesting separator, e.g. `SITESTATS_DEFAULTS__MAX_GROUPS=10`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SITESTATS_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(cfg)?;
    std::fs::write(path, contents)?;
    Ok(())
}
