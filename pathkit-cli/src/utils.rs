//! Utility functions for CLI operations.
//!
//! Configuration loading, path construction and output formatting shared
//! across commands.

use crate::error::CliError;
use pathkit::config::{Config, ConfigBuilder, ConfigLoader, StyleSetting};
use pathkit::{FileSystem, FileTime, FsPath, LogLevel, Style};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Grammar for lexical commands, overriding configuration.
    pub style: Option<StyleSetting>,

    /// Explicit configuration file, applied above every other source.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. The file named by `--config`
/// 3. Environment variables
/// 4. Configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        let explicit = ConfigLoader::load_file(path).map_err(|e| CliError::Config(e.to_string()))?;
        builder = builder.with_config(explicit);
    }

    let mut config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    if global.style.is_some() {
        config.style = global.style;
    }

    Ok(config)
}

/// The verbosity to run with: flags, then environment, then configuration.
pub fn resolve_log_level(global: &GlobalOptions) -> LogLevel {
    if global.verbose || global.quiet || env::var(pathkit::logging::LOG_MODE_ENV).is_ok() {
        return pathkit::init_logger(global.verbose, global.quiet).level();
    }

    load_configuration(global)
        .ok()
        .and_then(|config| config.log_mode)
        .and_then(|mode| LogLevel::parse(&mode).ok())
        .unwrap_or(LogLevel::Normal)
}

/// The grammar lexical commands read their arguments under.
pub fn lexical_style(global: &GlobalOptions) -> Result<Style, CliError> {
    Ok(load_configuration(global)?.style())
}

/// A filesystem over the host, whose paths use the host's grammar.
pub fn host_filesystem() -> FileSystem {
    FileSystem::native()
}

/// Interpret a command-line argument as a host path.
pub fn host_path(arg: &str) -> FsPath {
    FsPath::with_style(arg, Style::native())
}

/// Format a timestamp for display.
pub fn format_timestamp(time: FileTime) -> String {
    time.to_datetime().map_or_else(
        || format!("{}.{:09}", time.seconds, time.nanoseconds),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let t = FileTime::new(1_705_314_645, 0).unwrap(); // 2024-01-15 10:30:45 UTC
        assert_eq!(format_timestamp(t), "2024-01-15 10:30:45");
    }

    #[test]
    fn test_host_path_style() {
        assert_eq!(host_path("a").style(), Style::native());
    }

    #[test]
    fn test_explicit_style_wins() {
        let global = GlobalOptions {
            style: Some(StyleSetting::Windows),
            config: Some(PathBuf::from("/nonexistent/pathkit.yaml")),
            ..GlobalOptions::default()
        };
        // A missing explicit file is a configuration error.
        assert_eq!(load_configuration(&global).unwrap_err().exit_code(), 7);
    }
}
