//! Shell configuration from `wayline.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                              |
//! |--------------|------------------------------------------------------|
//! | `[nav]`      | Default route, lease/load timeouts, persist window   |
//! | `[[routes]]` | path -> page -> container entries                    |
//!
//! ```toml
//! [nav]
//! default_route = "/dashboard"
//!
//! [[routes]]
//! path = "/dashboard"
//! page = "dashboard"
//! container = "main-content"
//! ```

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::{ContainerId, NavPath, PageId};
use crate::log;
use crate::route::{Route, RouteTable};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing wayline.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Navigation settings
    #[serde(default)]
    pub nav: NavConfig,

    /// Route table entries
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// `[nav]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Path of the fallback route (must match a `[[routes]]` entry)
    pub default_route: String,

    /// Window after which an unreleased container claim is force-expired
    pub lease_timeout_ms: u64,

    /// Ceiling for a page module's `load()`
    pub load_timeout_ms: u64,

    /// Validity window of a persisted route record across a reload
    pub persist_window_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            default_route: "/".to_string(),
            lease_timeout_ms: 5_000,
            load_timeout_ms: 10_000,
            persist_window_ms: 15_000,
        }
    }
}

/// One `[[routes]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    /// URL path, e.g. `/risk-register`
    pub path: String,
    /// Logical page id
    pub page: String,
    /// Mount-point container id
    pub container: String,
}

impl AppConfig {
    /// Load configuration from a file path, warning about unknown fields.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string (no unknown-field tracking).
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate the configuration, collecting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.routes.is_empty() {
            errors.push("[[routes]]: at least one route entry is required".to_string());
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for (i, entry) in self.routes.iter().enumerate() {
            if entry.path.trim().is_empty() {
                errors.push(format!("routes[{i}].path: must not be empty"));
            }
            if entry.page.trim().is_empty() {
                errors.push(format!("routes[{i}].page: must not be empty"));
            }
            if entry.container.trim().is_empty() {
                errors.push(format!("routes[{i}].container: must not be empty"));
            }
            let normalized = NavPath::new(&entry.path);
            if !seen.insert(normalized.clone()) {
                errors.push(format!(
                    "routes[{i}].path: duplicate route path `{normalized}`"
                ));
            }
        }

        let default = NavPath::new(&self.nav.default_route);
        if !self
            .routes
            .iter()
            .any(|r| NavPath::new(&r.path) == default)
        {
            errors.push(format!(
                "nav.default_route: `{default}` does not match any [[routes]] entry"
            ));
        }

        for (name, value) in [
            ("nav.lease_timeout_ms", self.nav.lease_timeout_ms),
            ("nav.load_timeout_ms", self.nav.load_timeout_ms),
            ("nav.persist_window_ms", self.nav.persist_window_ms),
        ] {
            if value == 0 {
                errors.push(format!("{name}: must be greater than zero"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(
                errors
                    .iter()
                    .map(|e| format!("- {e}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ))
        }
    }

    /// Build the immutable route table from the `[[routes]]` entries.
    pub fn route_table(&self) -> anyhow::Result<RouteTable> {
        let routes = self
            .routes
            .iter()
            .map(|entry| Route {
                path: NavPath::new(&entry.path),
                page_id: PageId::new(&entry.page),
                container_id: ContainerId::new(&entry.container),
            })
            .collect();
        RouteTable::new(routes, &NavPath::new(&self.nav.default_route))
    }

    pub fn lease_timeout(&self) -> Duration {
        Duration::from_millis(self.nav.lease_timeout_ms)
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.nav.load_timeout_ms)
    }

    pub fn persist_window(&self) -> Duration {
        Duration::from_millis(self.nav.persist_window_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================
