//! Command dispatch for the tymap CLI.
//!
//! Each subcommand runs the shared scan pipeline up to the point it needs:
//! `scan` runs extraction and containment resolution over the whole tree,
//! `ast` stops after parsing and dumps raw module structure, `init` only
//! touches the config file.

use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, AstCommand, Command, ScanCommand};
use super::exit_status::ExitStatus;
use super::report;
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::core::{ScanContext, resolve_containment};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Ast(cmd)) => ast(cmd),
        Some(Command::Init) => {
            init()?;
            report::print_init_created();
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let ctx = ScanContext::new(&cmd.common)?;
    let parsed = ctx.parse_files()?;

    // Population first, containment second: a type may reference another
    // type declared in a later file, so resolution only runs once every
    // description has been merged.
    let mut registry = ctx.extract(&parsed);
    resolve_containment(&mut registry);

    if cmd.json {
        report::print_registry_json(&registry)?;
    } else {
        report::print_registry(&registry);
        report::print_scan_summary(registry.len(), parsed.len());
    }

    Ok(ExitStatus::Success)
}

fn ast(cmd: AstCommand) -> Result<ExitStatus> {
    let ctx = ScanContext::new(&cmd.common)?;
    let parsed = ctx.parse_files()?;

    report::print_ast_dump(&parsed);

    Ok(ExitStatus::Success)
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
