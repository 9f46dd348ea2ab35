//! CLI for the statute QA service
//!
//! - `serve`: run the HTTP API, ingesting the corpus at startup
//! - `ingest`: segment the corpus and report chunk counts without serving

pub mod ingest;
pub mod serve;

use clap::{Parser, Subcommand};

/// Legal question answering over statutory articles
#[derive(Parser)]
#[command(name = "statute-qa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Segment the corpus and print chunk counts, without starting the server
    Ingest(ingest::IngestArgs),
}
