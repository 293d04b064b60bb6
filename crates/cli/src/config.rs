//! Runtime configuration: command-line flags first, then environment
//! variables (handled by clap), then platform defaults.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use brewerp_observability::LogFormat;

use crate::args::Cli;

/// Directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "brewerp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
    pub log_level: String,
}

impl CliConfig {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };

        Ok(Self {
            data_dir,
            log_format: cli.log_format.into(),
            log_level: cli.log_level.clone(),
        })
    }
}

/// `<platform data dir>/brewerp`, e.g. `~/.local/share/brewerp` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| anyhow!("no platform data directory; pass --data-dir or set BREWERP_DATA_DIR"))
}
