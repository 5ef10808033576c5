//! CLI argument definitions and command implementations.

pub mod route;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Parlance: a database-chat and multi-model routing service.
#[derive(Debug, Parser)]
#[command(name = "parlance", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Export OpenTelemetry spans to stdout
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 7860)]
        port: u16,

        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Print the routing decision for a query without calling any backend
    Route {
        /// The query to route
        query: String,
    },

    /// Show configuration and provider readiness
    Status {
        /// Send a minimal completion through each configured provider
        #[arg(long)]
        check: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
