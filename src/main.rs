use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use env_probe::{Probe, SystemEnvironment};

#[derive(Parser)]
#[command(name = "env-probe")]
#[command(disable_help_flag = true, disable_version_flag = true, ignore_errors = true)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        debug!("Ignoring {} command line argument(s)", cli.ignored.len());
    }

    let probe = Probe::new(SystemEnvironment::new());
    let stdout = io::stdout();
    probe.run(&mut stdout.lock())?;

    Ok(())
}
