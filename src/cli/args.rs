//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Tymap
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan`: Extract record types and print the registry
//! - `ast`: Print the raw AST of each eligible source file (no extraction)
//! - `init`: Initialize a tymap configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by the commands that traverse a source tree.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory to analyze
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the registry as JSON instead of the pretty dump
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AstCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract record types from a TypeScript tree and print the registry
    Scan(ScanCommand),
    /// Print the raw AST of each eligible source file (diagnostic mode)
    Ast(AstCommand),
    /// Initialize a new .tymaprc.json configuration file
    Init,
}
