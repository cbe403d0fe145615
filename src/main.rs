use std::process::ExitCode;

use cadastro_lib::bootstrap;
use cadastro_lib::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    bootstrap::tracing::init_tracing_subscriber()?;

    bootstrap::run(cli).await
}
