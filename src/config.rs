use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tymaprc.json";

/// Naming conventions for test-only source files.
///
/// Files matching any of these patterns never reach the parser when
/// `ignoreTestFiles` is enabled (the default).
pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Paths or glob patterns to exclude from scanning.
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Directories (relative to the scan root) to restrict scanning to.
    /// Empty means the whole tree.
    #[serde(default)]
    pub includes: Vec<String>,

    /// Skip files matching the test-file naming convention.
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,

    /// Record heritage clauses and intersection bases as fields keyed by the
    /// base type's own name.
    #[serde(default = "default_embedded_fields")]
    pub embedded_fields: bool,
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_embedded_fields() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            embedded_fields: default_embedded_fields(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in self.includes.iter().filter(|p| is_glob_pattern(p)) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of loading configuration.
pub struct ConfigResult {
    pub config: Config,
    /// Whether the config came from a file (false = built-in defaults).
    pub from_file: bool,
}

/// Load configuration from `.tymaprc.json` in the given directory.
///
/// A missing file is not an error; defaults apply. An unreadable or invalid
/// file is a configuration error and aborts the run.
pub fn load_config(dir: &Path) -> Result<ConfigResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return Ok(ConfigResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    config.validate()?;

    Ok(ConfigResult {
        config,
        from_file: true,
    })
}

/// Default configuration serialized as pretty JSON, for `tymap init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json + "\n")
}
