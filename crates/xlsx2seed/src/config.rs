use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use xlsx2seed_core::SheetConfig;

use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "xlsx2seed.yml";

/// Where the sheet config comes from, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Inline(String),
    File(PathBuf),
    Default,
}

impl ConfigSource {
    /// Inline text beats an explicit file, which beats `xlsx2seed.yml` in `cwd`.
    pub fn resolve(content: Option<&str>, path: Option<&Path>, cwd: &Path) -> Self {
        if let Some(content) = content.filter(|c| !c.is_empty()) {
            return ConfigSource::Inline(content.to_string());
        }
        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            return ConfigSource::File(path.to_path_buf());
        }
        let default = cwd.join(DEFAULT_CONFIG_FILE);
        if default.exists() {
            ConfigSource::File(default)
        } else {
            ConfigSource::Default
        }
    }

    pub fn load(&self) -> Result<SheetConfig> {
        match self {
            ConfigSource::Inline(text) => {
                SheetConfig::from_yaml_str(text).context("invalid inline config content")
            }
            ConfigSource::File(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                SheetConfig::from_yaml_str(&text)
                    .with_context(|| format!("invalid config file {}", path.display()))
            }
            ConfigSource::Default => Ok(SheetConfig::default()),
        }
    }
}

/// Load the config named by the command line and apply its overrides.
pub fn load_config(cli: &Cli, cwd: &Path) -> Result<SheetConfig> {
    let source = ConfigSource::resolve(cli.config_content.as_deref(), cli.config.as_deref(), cwd);
    let mut config = source.load()?;
    config.apply_overrides(&cli.version_column, &cli.ignore_columns);
    Ok(config)
}
