//! Configuration management for the directory.
//!
//! Settings are layered (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. `config/default.toml` (if it exists)
//! 3. `config/{environment}.toml` (if it exists, environment from `SITEDIR_ENV`)
//! 4. Environment variables prefixed with `SITEDIR_`
//!
//! ## Example Configuration
//!
//! ```toml
//! [telemetry]
//! log_level = "debug"
//! json_logging = false
//!
//! [store]
//! seed_path = "data/listings.json"
//!
//! [overview]
//! featured_limit = 3
//! popular_limit = 6
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main directory configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub overview: OverviewConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: false,
            log_level: default_log_level(),
        }
    }
}

/// Listing store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON seed file; the bundled dataset is used when unset
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Image used for submissions that do not provide one
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            placeholder_image: default_placeholder_image(),
        }
    }
}

/// Sizes of the ranked sections shown on the directory overview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewConfig {
    /// Featured listings on the overview
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    /// Most-viewed listings on the overview
    #[serde(default = "default_section_limit")]
    pub popular_limit: usize,
    /// Newest listings on the overview
    #[serde(default = "default_section_limit")]
    pub recent_limit: usize,
    /// Number of same-category listings shown next to a listing
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
            popular_limit: default_section_limit(),
            recent_limit: default_section_limit(),
            related_limit: default_related_limit(),
        }
    }
}

fn default_service_name() -> String {
    "site-directory".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_placeholder_image() -> String {
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=200&fit=crop".to_string()
}

fn default_featured_limit() -> usize {
    3
}

fn default_section_limit() -> usize {
    6
}

fn default_related_limit() -> usize {
    3
}

impl DirectoryConfig {
    /// Load configuration from files and environment variables.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use site_directory_common::config::DirectoryConfig;
    ///
    /// let config = DirectoryConfig::load().expect("Failed to load configuration");
    /// println!("Log level: {}", config.telemetry.log_level);
    /// ```
    pub fn load() -> Result<Self> {
        let env = std::env::var("SITEDIR_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Example: SITEDIR_OVERVIEW__POPULAR_LIMIT=10
            .add_source(
                config::Environment::with_prefix("SITEDIR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let directory_config: DirectoryConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        directory_config.validate()?;

        Ok(directory_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        if self.telemetry.service_name.is_empty() {
            anyhow::bail!("Service name is required");
        }

        let limits = [
            ("featured_limit", self.overview.featured_limit),
            ("popular_limit", self.overview.popular_limit),
            ("recent_limit", self.overview.recent_limit),
            ("related_limit", self.overview.related_limit),
        ];
        for (name, value) in limits {
            if value == 0 {
                anyhow::bail!("Overview {} must be greater than 0", name);
            }
        }

        Ok(())
    }

    /// Create a development configuration with verbose logging
    pub fn development() -> Self {
        Self {
            telemetry: TelemetryConfig {
                service_name: "site-directory-dev".to_string(),
                json_logging: false,
                log_level: "debug".to_string(),
            },
            ..Self::default()
        }
    }
}
