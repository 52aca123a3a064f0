use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod io;

#[derive(Subcommand, Debug)]
enum Command {
    Analyze(analyze::Args),
    Sequence(sequence::Args),
}

#[derive(Parser)]
#[command(about = "Sprague-Grundy sequences of subtraction and all-but games")]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout is reserved for reports
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grundy=info,grundy_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Analyze(args) => analyze::run(args),
        Command::Sequence(args) => sequence::run(args),
    }
}
