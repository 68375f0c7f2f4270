//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --verbose) are inherited by all subcommands.
//! Running without a subcommand notifies the configured roster, or runs the
//! demo sequence when no roster is configured.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// notifier - send notifications to users and admins
#[derive(Parser, Debug)]
#[command(name = "notifier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output notifications as NDJSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Notify a single recipient (an admin when --email is given)
    Send {
        /// Display name of the recipient
        #[arg(long)]
        name: String,

        /// Email address; makes the recipient an admin
        #[arg(long)]
        email: Option<String>,
    },
}
