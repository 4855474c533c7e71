use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "suftree";
const CONFIG_FILE: &str = "config.json";

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "SUFTREE_CONFIG";

/// Application configuration stored in the user's config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory for per-phase DOT files when `--out` is not given
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Terminator appended to the input when `--sentinel` is not given
    #[serde(default)]
    pub sentinel: Option<char>,

    /// Colored terminal reports
    #[serde(default = "default_color")]
    pub color: bool,

    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_color() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            sentinel: None,
            color: default_color(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load config from `path`, or return default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// The configured sentinel as a single byte
    pub fn sentinel_byte(&self) -> Result<Option<u8>> {
        self.sentinel.map(sentinel_to_byte).transpose()
    }
}

/// Convert a sentinel character to the byte appended to the text
pub fn sentinel_to_byte(c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        anyhow::bail!("Sentinel must be an ASCII character, got {:?}", c)
    }
}

/// Get the path to the config file
///
/// `SUFTREE_CONFIG` takes precedence over the platform config directory.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
