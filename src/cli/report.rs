//! Registry rendering and printing utilities.
//!
//! This module renders the finished registry (pretty dump or JSON) and the
//! raw-AST diagnostic dump. Separate from core logic so the extraction engine
//! can be used as a library without pulling in terminal output.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::config::CONFIG_FILE_NAME;
use crate::core::{ParsedSource, Registry, TypeDescription};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the registry dump to stdout.
///
/// Types are sorted by name so that a fixed input tree always renders
/// identically, regardless of traversal order.
pub fn print_registry(registry: &Registry) {
    print_registry_to(registry, &mut io::stdout().lock());
}

/// Print the registry dump to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_registry_to<W: Write>(registry: &Registry, writer: &mut W) {
    let mut types: Vec<&TypeDescription> = registry.values().collect();
    types.sort_by(|a, b| a.name.cmp(&b.name));

    for ty in types {
        print_type(ty, writer);
    }
}

fn print_type<W: Write>(ty: &TypeDescription, writer: &mut W) {
    let field_count = format!(
        "({} {})",
        ty.fields.len(),
        if ty.fields.len() == 1 {
            "field"
        } else {
            "fields"
        }
    );
    let _ = writeln!(writer, "{} {}", ty.name.bold().cyan(), field_count.dimmed());

    // Align the type column on the widest field name (display width, so
    // non-ASCII property names line up too).
    let name_width = ty
        .fields
        .keys()
        .map(|name| UnicodeWidthStr::width(name.as_str()))
        .max()
        .unwrap_or(0);

    for (name, descriptor) in &ty.fields {
        let padding = name_width - UnicodeWidthStr::width(name.as_str());
        let _ = writeln!(writer, "  {}{:padding$}  {}", name, "", descriptor);
    }

    if !ty.contains.is_empty() {
        let names = ty
            .contains
            .iter()
            .map(|name| name.green().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(writer, "  {} {}", "contains:".bold(), names);
    }

    let _ = writeln!(writer);
}

/// Print the registry as pretty JSON to stdout.
///
/// Entries appear in registry order (sorted file order, then declaration
/// order), which is deterministic for a fixed input tree.
pub fn print_registry_json(registry: &Registry) -> Result<()> {
    let json = serde_json::to_string_pretty(registry)?;
    println!("{}", json);
    Ok(())
}

/// Print the scan summary line.
pub fn print_scan_summary(type_count: usize, file_count: usize) {
    print_scan_summary_to(type_count, file_count, &mut io::stdout().lock());
}

/// Print the scan summary to a custom writer.
pub fn print_scan_summary_to<W: Write>(type_count: usize, file_count: usize, writer: &mut W) {
    let msg = format!(
        "Extracted {} {} from {} source {}",
        type_count,
        if type_count == 1 { "type" } else { "types" },
        file_count,
        if file_count == 1 { "file" } else { "files" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print the raw AST of every parsed file (diagnostic mode).
pub fn print_ast_dump(parsed: &[ParsedSource]) {
    print_ast_dump_to(parsed, &mut io::stdout().lock());
}

/// Print the raw AST dump to a custom writer.
pub fn print_ast_dump_to<W: Write>(parsed: &[ParsedSource], writer: &mut W) {
    for source in parsed {
        let _ = writeln!(writer, "{} {}", "-->".blue(), source.file_path);
        let _ = writeln!(writer, "{:#?}", source.module);
        let _ = writeln!(writer);
    }
}

/// Print the `init` confirmation message.
pub fn print_init_created() {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}
