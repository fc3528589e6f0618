//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Site identity and public URL
    #[serde(default)]
    pub site: SiteConfig,

    /// Where and how the generated site is written
    #[serde(default)]
    pub output: OutputConfig,

    /// Audit browser defaults
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(AppError::validation("site.name is empty"));
        }
        // Internal links are root-absolute, so the site must be served from `/`.
        let base = self.site.base_url()?;
        if base.path() != "/" {
            return Err(AppError::validation(format!(
                "site.base_url must be a site root, got path '{}'",
                base.path()
            )));
        }
        if self.output.dir.trim().is_empty() {
            return Err(AppError::validation("output.dir is empty"));
        }
        if self.output.max_concurrent_writes == 0 {
            return Err(AppError::validation(
                "output.max_concurrent_writes must be > 0",
            ));
        }
        if self.audit.default_module.trim().is_empty() {
            return Err(AppError::validation("audit.default_module is empty"));
        }
        Ok(())
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name shown in navigation and titles
    #[serde(default = "defaults::site_name")]
    pub name: String,

    /// Footer tagline
    #[serde(default = "defaults::tagline")]
    pub tagline: String,

    /// Absolute public URL the site is served from
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Year printed in the copyright footer
    #[serde(default = "defaults::copyright_year")]
    pub copyright_year: i32,
}

impl SiteConfig {
    /// Parsed `base_url`.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(AppError::validation(format!(
                "site.base_url '{}' cannot be used as a base",
                self.base_url
            )));
        }
        Ok(url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: defaults::site_name(),
            tagline: defaults::tagline(),
            base_url: defaults::base_url(),
            copyright_year: defaults::copyright_year(),
        }
    }
}

/// Output settings for the site build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "defaults::output_dir")]
    pub dir: String,

    /// Maximum pages written concurrently
    #[serde(default = "defaults::max_concurrent_writes")]
    pub max_concurrent_writes: usize,

    /// Write `sitemap.xml`
    #[serde(default = "defaults::enabled")]
    pub sitemap: bool,

    /// Skip pages whose digest matches the previous manifest
    #[serde(default = "defaults::enabled")]
    pub skip_unchanged: bool,
}

impl OutputConfig {
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            max_concurrent_writes: defaults::max_concurrent_writes(),
            sitemap: true,
            skip_unchanged: true,
        }
    }
}

/// Audit browser defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Module selected on `/app/audit/`
    #[serde(default = "defaults::default_module")]
    pub default_module: String,

    /// Figure shown as "Platforms Tracked" on the dashboard
    #[serde(default = "defaults::platforms_tracked")]
    pub platforms_tracked: u32,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            default_module: defaults::default_module(),
            platforms_tracked: defaults::platforms_tracked(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when RUST_LOG is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Site defaults
    pub fn site_name() -> String {
        "Kasparro".into()
    }
    pub fn tagline() -> String {
        "AI-Native Brand Intelligence Platform".into()
    }
    pub fn base_url() -> String {
        "https://kasparro.example/".into()
    }
    pub fn copyright_year() -> i32 {
        2024
    }

    // Output defaults
    pub fn output_dir() -> String {
        "site".into()
    }
    pub fn max_concurrent_writes() -> usize {
        8
    }
    pub fn enabled() -> bool {
        true
    }

    // Audit defaults
    pub fn default_module() -> String {
        "ai-visibility".into()
    }
    pub fn platforms_tracked() -> u32 {
        6
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
