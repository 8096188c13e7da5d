use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use wellops::{config::RootConfig, logging::setup_tracing};

mod check;
mod run;

#[derive(Debug, Subcommand)]
enum Command {
    /// Execute a job against the local store
    Run(run::Args),

    /// Validate a job without touching any store
    Check(check::Args),
}

#[derive(Debug, Parser)]
#[clap(name = "wellops")]
#[clap(bin_name = "wellops")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let mut config = RootConfig::new(args.config.as_deref()).into_diagnostic()?;

    setup_tracing(&config.logging)?;

    match args.command {
        Command::Run(x) => run::run(&mut config, &x).await?,
        Command::Check(x) => check::run(&x)?,
    };

    Ok(())
}
