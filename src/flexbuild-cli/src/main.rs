mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "flexbuild=debug"
    } else {
        "flexbuild=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Encode { store, character } => {
            commands::encode::handle(&store, &character)?;
        }

        Commands::Decode {
            text,
            pretty,
            format,
        } => {
            commands::decode::handle(&text, pretty, format)?;
        }

        Commands::Inspect { text } => {
            commands::inspect::handle(&text);
        }
    }

    Ok(())
}
