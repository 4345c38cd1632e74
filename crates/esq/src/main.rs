//! Command-line interface for the esq search compiler.

use std::process::ExitCode;

use clap::Parser;

mod args;
mod commands;

use args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query(command) => commands::cmd_query(&command),
        Commands::Template(command) => commands::cmd_template(&command),
    }
}
