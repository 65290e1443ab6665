use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub roster: RosterConfig,
    pub verify: VerifyConfig,
    pub assets: AssetsConfig,
    #[serde(default)]
    pub issuance: IssuanceConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    pub csv_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyConfig {
    /// Base URL encoded into every pass; the hash is appended as the
    /// sole query parameter
    pub base_url: String,
    pub club_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    pub font_path: PathBuf,
    pub logo_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssuanceConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceConfig {
    #[serde(default = "default_max_requests_per_minute")]
    pub max_requests_per_minute: u32,
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub api_key: String,
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("passes")
}

fn default_concurrency() -> usize {
    num_cpus::get()
}

fn default_max_requests_per_minute() -> u32 {
    100
}

fn default_cleanup_interval() -> u64 {
    300 // 5 minutes
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Default for IssuanceConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            concurrency: default_concurrency(),
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_requests_per_minute: default_max_requests_per_minute(),
            cleanup_interval: default_cleanup_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.verify.base_url.is_empty() {
            bail!("base_url must not be empty");
        }

        if !self.verify.base_url.starts_with("http://") && !self.verify.base_url.starts_with("https://") {
            bail!("base_url must start with http:// or https://");
        }

        // The hash is appended with '?', so the base must not carry
        // its own query string
        if self.verify.base_url.contains('?') {
            bail!("base_url must not contain a query string");
        }

        if self.verify.club_name.is_empty() {
            bail!("club_name must not be empty");
        }

        if self.issuance.concurrency == 0 {
            bail!("concurrency must be greater than 0");
        }

        if self.performance.max_requests_per_minute == 0 {
            bail!("max_requests_per_minute must be greater than 0");
        }

        if self.performance.cleanup_interval == 0 {
            bail!("cleanup_interval must be greater than 0");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        if self.admin.api_key.is_empty() {
            bail!("api_key must not be empty");
        }

        Ok(())
    }
}
