//! Configuration primitives for the CyberGuard reporting desk.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/CyberGuard/config/config.toml on Windows
//!   $XDG_DATA_HOME/CyberGuard/config/config.toml on Linux
//!   ~/Library/Application Support/CyberGuard/config/config.toml on macOS
//!
//! The config carries the chat script overrides and the report assembly
//! policies. Everything has a default so a missing file is never an error.

use serde::{Deserialize, Serialize};

use crate::chat::ScriptOverride;
use crate::reports::EvidencePolicy;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Conversation wording (bot name, prompt overrides).
    #[serde(default)]
    pub chat: ChatSettings,
    /// How finished drafts are turned into reports.
    #[serde(default)]
    pub reports: ReportSettings,
    /// Placeholder geocoder knobs.
    #[serde(default)]
    pub geocoding: GeocodingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Optional replacement prompts and choice labels. Field order is fixed.
    #[serde(default)]
    pub script: Option<ScriptOverride>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            script: None,
        }
    }
}

fn default_bot_name() -> String {
    "Billy".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub evidence_policy: EvidencePolicy,
    /// Drop finished reports when nobody is signed in.
    #[serde(default = "default_require_user")]
    pub require_user: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            evidence_policy: EvidencePolicy::default(),
            require_user: default_require_user(),
        }
    }
}

const fn default_require_user() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingSettings {
    /// Decimal places kept on generated coordinates.
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
        }
    }
}

const fn default_decimals() -> u32 {
    6
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Returns the root directory where CyberGuard stores data.
///
/// Order of precedence:
/// 1. `CYBERGUARD_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("CYBERGUARD_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("CyberGuard"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    load_from(&path)
}

pub fn load_from(path: &std::path::Path) -> Result<AppConfig> {
    if path.exists() {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create CyberGuard config directory {:?}", dir))?;
    let path = dir.join(CONFIG_FILE_NAME);
    let data = toml::to_string_pretty(config).context("Failed to serialize CyberGuard settings")?;
    fs::write(&path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}

/// Creates `config/` and `logs/` under the workspace root.
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let root = workspace_root()?;
    let paths = WorkspacePaths {
        config_dir: root.join("config"),
        logs_dir: root.join("logs"),
        root,
    };
    for dir in [&paths.config_dir, &paths.logs_dir] {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create CyberGuard workspace directory {:?}", dir))?;
    }
    Ok(paths)
}

#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn events_log(&self) -> PathBuf {
        self.logs_dir.join("events.jsonl")
    }
}
