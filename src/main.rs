//! # readme-ls
//!
//! **readme-ls** keeps the projects section of a GitHub profile README up
//! to date.
//!
//! Features:
//! - `readme-ls update` fetches the user's public repositories, renders
//!   them as an `ls -o`-style listing between the
//!   `<!--START_SECTION:projects-->` / `<!--END_SECTION:projects-->`
//!   markers, and commits + pushes the change
//! - `readme-ls banner` serves the profile banner SVG with the remote
//!   widgets inlined as data URLs
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::{Parser, Subcommand};
use readme_ls::{Config, cmd_banner, cmd_update};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "readme-ls",
    version,
    about = "readme-ls - keep a profile README's projects listing current",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Cmd {
    /// Refresh the projects section of the README and push the change
    Update {
        /// GitHub user whose public repositories are listed
        /// (falls back to GH_USERNAME)
        #[arg(long)]
        user: Option<String>,
        /// Commit message for the README change (falls back to COMMIT_MSG)
        #[arg(long)]
        message: Option<String>,
        /// Path to the README file (falls back to README_PATH)
        #[arg(long)]
        readme: Option<PathBuf>,
    },
    /// Serve the profile banner SVG over HTTP
    Banner {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

/// CLI entry point.
///
/// Parses arguments with `clap` and executes the selected subcommand.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap();

    match cmd {
        Cmd::Update {
            user,
            message,
            readme,
        } => cmd_update(Config::resolve(user, message, readme)?),
        Cmd::Banner { addr } => cmd_banner(addr),
    }
}
