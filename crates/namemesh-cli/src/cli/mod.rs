//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = commands::Context {
        server: cli.server,
        output_format: cli.output.unwrap_or(OutputFormat::Pretty),
    };

    match cli.command {
        Commands::Info => commands::info::execute(ctx).await,
        Commands::Neighbors => commands::neighbors::execute(ctx).await,
        Commands::Names => commands::names::execute(ctx).await,
        Commands::Check { name } => commands::check::execute(ctx, &name).await,
        Commands::Zone(args) => commands::zone::execute(ctx, args).await,
        Commands::Name(args) => commands::name::execute(ctx, args).await,
        Commands::Roster(args) => commands::roster::execute(ctx, args).await,
    }
}
