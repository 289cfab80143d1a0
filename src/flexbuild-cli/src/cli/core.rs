//! Core CLI definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flexbuild")]
#[command(about = "Create and read character build share strings", long_about = None)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a share string for a character in a store dump
    #[command(visible_alias = "e")]
    Encode {
        /// JSON object of store entries (e.g. a localStorage export)
        #[arg(short, long, env = "FLEXBUILD_STORE")]
        store: PathBuf,

        /// Character key (e.g. Diluc)
        #[arg(short, long)]
        character: String,
    },

    /// Print the character, weapon and artifacts in a share string
    #[command(visible_alias = "d")]
    Decode {
        /// Share string (v=<version>&d=<payload>)
        text: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show envelope details and why a share string fails to load
    #[command(visible_alias = "i")]
    Inspect {
        /// Share string (v=<version>&d=<payload>)
        text: String,
    },
}
