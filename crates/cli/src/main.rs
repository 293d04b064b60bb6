use anyhow::{Context, Result};
use clap::Parser;

use brewerp_cli::{Cli, CliConfig, execute};
use brewerp_infra::{JsonFileStateStore, Workspace};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::resolve(&cli)?;

    brewerp_observability::init(config.log_format, &config.log_level);
    tracing::debug!(data_dir = %config.data_dir.display(), "starting");

    let store = JsonFileStateStore::in_dir(&config.data_dir);
    let mut workspace = Workspace::open(store)
        .with_context(|| format!("failed to open state in {}", config.data_dir.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut workspace, cli.command, cli.json, &mut out)
}
