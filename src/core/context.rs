use std::{path::PathBuf, sync::Arc};

use anyhow::{Context as _, Result, anyhow};
use swc_common::SourceMap;

use crate::{
    cli::CommonArgs,
    config::{Config, load_config},
    core::{
        file_scanner::scan_files,
        parser::{ParsedSource, parse_source},
        registry::{Registry, merge},
        visitor::TypeCollector,
    },
};

/// Orchestrator for one scan run.
///
/// Construction performs everything that can fail before traversal begins:
/// validating the project directory, loading configuration, and scanning the
/// tree for eligible files. The pipeline then runs as explicit sequential
/// steps - `parse_files`, `extract`, and the caller's containment resolution
/// over the returned registry. Files are processed one at a time in sorted
/// path order, so a fixed tree always yields the same registry.
pub struct ScanContext {
    /// Merged configuration (config file or defaults).
    pub config: Config,

    /// Project root directory.
    pub root_dir: PathBuf,

    /// Eligible source files, sorted.
    pub files: Vec<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl ScanContext {
    /// Create a new `ScanContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the project directory does not exist or the
    /// config file is invalid. Both are configuration errors and abort the
    /// run before any traversal.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args.path.clone();

        if !root_dir.is_dir() {
            anyhow::bail!("Project directory not found: {}", root_dir.display());
        }

        let path = root_dir
            .to_str()
            .ok_or_else(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .tymaprc.json found, using default configuration");
        }
        let config = config_result.config;

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
        })
    }

    /// Parse every eligible file, in sorted path order.
    ///
    /// The first unreadable file or syntax error aborts the whole run: a
    /// malformed file could yield a partial AST and a misleading registry,
    /// so there is no per-file recovery.
    pub fn parse_files(&self) -> Result<Vec<ParsedSource>> {
        let mut parsed = Vec::with_capacity(self.files.len());

        for file_path in &self.files {
            if self.verbose {
                eprintln!("Parsing {}", file_path);
            }
            let code = std::fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read file: {}", file_path))?;

            // Each file gets its own SourceMap; spans never cross files.
            let source_map = Arc::new(SourceMap::default());
            parsed.push(parse_source(code, file_path, source_map)?);
        }

        Ok(parsed)
    }

    /// Population pass: visit every parsed module and merge the extracted
    /// descriptions into one registry.
    ///
    /// The returned registry has empty `contains` lists; run
    /// [`crate::core::resolve_containment`] once all files are merged.
    pub fn extract(&self, parsed: &[ParsedSource]) -> Registry {
        let mut registry = Registry::new();

        for source in parsed {
            let collector = TypeCollector::new(&source.source_map, self.config.embedded_fields);
            for description in collector.collect(&source.module) {
                merge(&mut registry, description);
            }
        }

        registry
    }
}
