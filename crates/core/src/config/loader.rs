use crate::closure::ResolverOptions;
use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("failed to expand path '{0}'")]
    Expand(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve configuration.
    ///
    /// An explicit `config_path` must exist. Without one, the default
    /// location is used when present and built-in defaults otherwise.
    /// `vault_override` takes precedence over the file's `vault_root`.
    pub fn load(
        config_path: Option<&Path>,
        vault_override: Option<&Path>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let cf = match config_path {
            Some(path) => Self::read(path)?,
            None => {
                let path = default_config_path();
                if path.exists() { Self::read(&path)? } else { ConfigFile::default() }
            }
        };

        Self::resolve(&cf, vault_override)
    }

    fn read(path: &Path) -> Result<ConfigFile, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        Ok(cf)
    }

    fn resolve(
        cf: &ConfigFile,
        vault_override: Option<&Path>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let vault_root = match vault_override {
            Some(p) => p.to_path_buf(),
            None => expand_path(cf.export.vault_root.as_deref().unwrap_or("."))?,
        };
        let sub = |s: &str| s.replace("{{vault_root}}", &vault_root.to_string_lossy());

        let excluded_folders = cf
            .export
            .excluded_folders
            .iter()
            .map(|f| expand_path(&sub(f)))
            .collect::<Result<Vec<_>, _>>()?;

        // Resolve log file path if present
        let log_cfg = &cf.logging;
        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            vault_root,
            excluded_folders,
            resolver: ResolverOptions {
                dedupe: cf.export.dedupe,
                link_mode: cf.export.links_per_line,
                max_depth: cf.export.max_depth,
            },
            use_index: cf.export.use_index,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("mdbundle").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("mdbundle").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::Expand(input.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}
