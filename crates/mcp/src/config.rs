use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use todoapp_core::TimeZoneConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(skip)]
    pub source: Option<PathBuf>,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub time: TimeZoneConfig,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_server_version")]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Longest accepted request line, in bytes
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

fn default_server_name() -> String {
    "todoapp-mcp".to_string()
}

fn default_server_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_max_line_length() -> usize {
    1024 * 1024
}

fn default_log_filter() -> String {
    "todoapp=info".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
        }
    }
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            source: None,
            server: ServerSection::default(),
            time: TimeZoneConfig::default(),
            transport: TransportConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl McpConfig {
    /// Load from a TOML file, falling back to defaults when it does not exist
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .context("Failed to read configuration file")?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
        config.source = Some(config_path.to_path_buf());

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration file")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.time.offset()?;
        anyhow::ensure!(
            self.transport.max_line_length > 0,
            "transport.max_line_length must be positive"
        );
        Ok(())
    }
}
