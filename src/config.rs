use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::reminder::DEFAULT_LIST_NAME;

/// Location of the reminder script relative to the executable's directory
pub const DEFAULT_SCRIPT_PATH: &str = "scripts/add_reminder.sh";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the external reminder script
    pub script_path: PathBuf,
    /// List name treated the same as "no list given"
    pub default_list: String,
}

/// On-disk TOML form; every key is optional
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    script_path: Option<PathBuf>,
    default_list: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_path: default_script_path(),
            default_list: DEFAULT_LIST_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file on top of the defaults
    ///
    /// A relative `script_path` is resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut config = Config::default();
        if let Some(script_path) = file.script_path {
            config.script_path = base_dir.join(script_path);
        }
        if let Some(default_list) = file.default_list {
            config.default_list = default_list;
        }
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        script_path: Option<PathBuf>,
        default_list: Option<String>,
    ) -> Self {
        if let Some(path) = script_path {
            self.script_path = path;
        }
        if let Some(list) = default_list {
            self.default_list = list;
        }
        self
    }
}

/// `scripts/add_reminder.sh` next to the running executable, falling back to
/// the current directory when the executable path is unknown
fn default_script_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_SCRIPT_PATH)
}
