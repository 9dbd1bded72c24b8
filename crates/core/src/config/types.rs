use std::path::PathBuf;

use serde::Deserialize;

use crate::closure::{DEFAULT_MAX_DEPTH, DedupeKey, ResolverOptions};
use crate::vault::LinkMode;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self { version: 1, export: ExportConfig::default(), logging: LoggingConfig::default() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Vault to search; the current directory when unset.
    #[serde(default)]
    pub vault_root: Option<String>,
    /// Folders never searched for link targets (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default)]
    pub dedupe: DedupeKey,
    #[serde(default)]
    pub links_per_line: LinkMode,
    /// Build a file-name index once instead of walking the vault per link.
    #[serde(default = "default_use_index")]
    pub use_index: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            vault_root: None,
            excluded_folders: Vec::new(),
            max_depth: default_max_depth(),
            dedupe: DedupeKey::default(),
            links_per_line: LinkMode::default(),
            use_index: default_use_index(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_use_index() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub vault_root: PathBuf,
    /// Folders to exclude from lookups.
    pub excluded_folders: Vec<PathBuf>,
    pub resolver: ResolverOptions,
    pub use_index: bool,
    pub logging: LoggingConfig,
}
