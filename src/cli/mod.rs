//! CLI module for Keygate

pub mod serve;

use clap::{Parser, Subcommand};

/// Keygate - API key issuance and validation gate
#[derive(Parser)]
#[command(name = "keygate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
