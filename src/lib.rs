//! Tymap - record type structure extraction for TypeScript projects
//!
//! Tymap is a CLI tool and library that scans a TypeScript source tree,
//! extracts every record-like type declaration (interfaces and object-literal
//! type aliases), and builds a name-indexed registry of type descriptions:
//! field names, declared field types, and which other discovered types each
//! type structurally contains. The registry is useful for dependency
//! visualization, documentation generation, and schema-graph analysis.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, dispatch, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (file scanning, parsing, visiting, resolution)

pub mod cli;
pub mod config;
pub mod core;
