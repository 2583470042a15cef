use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::args::ParseOptions;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Name rewriting applied while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Lowercase option names (default: on Windows only).
    #[serde(default = "default_platform_rewrite")]
    pub fold_case: bool,
    /// Accept `/name` for `-name` (default: on Windows only).
    #[serde(default = "default_platform_rewrite")]
    pub slash_prefix: bool,
}

/// Diagnostic logging for the parser and the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` (default: "warn").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file base path. Logs go to stderr when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_platform_rewrite() -> bool {
    cfg!(windows)
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl ParserConfig {
    pub fn options(&self) -> ParseOptions {
        ParseOptions {
            fold_case: self.fold_case,
            slash_prefix: self.slash_prefix,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fold_case: default_platform_rewrite(),
            slash_prefix: default_platform_rewrite(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
