//! CLI module for the bookshelf API
//!
//! Provides subcommands for running the server and seeding sample data:
//! - `serve`: run the HTTP API server (default)
//! - `seed`: populate storage with sample authors and books

pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// Bookshelf API - authors and books over HTTP
#[derive(Parser)]
#[command(name = "bookshelf-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default mode)
    Serve,

    /// Populate storage with sample authors and books
    Seed,
}
