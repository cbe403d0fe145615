use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cadastro")]
#[command(about = "Cadastro de membros: validação e envio de inscrições", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a registrant profile and submit it
    Submit {
        /// JSON file keyed by form field (nome, dataNascimento, ...)
        profile: PathBuf,
    },

    /// Open a liveness check session and print its id
    Liveness,

    /// List the municipalities accepted by the form
    Municipalities,
}
