//! Effective settings for one CLI invocation

use crate::commands::Cli;
use crate::error::{CliError, CliResult};
use cotejo::ComparatorConfig;
use std::path::Path;

/// How much the CLI prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Failures only
    Quiet,
    /// Per-run status lines
    #[default]
    Normal,
    /// Per-element results in the log
    Verbose,
    /// Snapshot recording and correlation details
    Debug,
}

impl Verbosity {
    /// Level from `-q` and the number of `-v` flags; `-q` wins
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Debug,
        }
    }

    /// Whether status lines are suppressed
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// `tracing` filter used when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// When to color terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Always
    Always,
    /// When stderr supports it
    #[default]
    Auto,
    /// Never
    Never,
}

impl ColorChoice {
    /// Resolve against the terminal
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stderr().features().colors_supported(),
        }
    }
}

/// Settings shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Output level
    pub verbosity: Verbosity,
    /// Color choice
    pub color: ColorChoice,
    /// Comparator settings, from `--config` or defaults
    pub comparator: ComparatorConfig,
}

impl CliConfig {
    /// Defaults: normal output, automatic color, default comparator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings from parsed arguments, loading `--config` when given
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let comparator = match &cli.config {
            Some(path) => Self::load_comparator(path)?,
            None => ComparatorConfig::default(),
        };
        Ok(Self {
            verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
            color: cli.color.into(),
            comparator,
        })
    }

    /// Replace the comparator settings
    #[must_use]
    pub fn with_comparator(mut self, comparator: ComparatorConfig) -> Self {
        self.comparator = comparator;
        self
    }

    /// Load comparator settings from a `.json`, `.yaml` or `.yml` file
    pub fn load_comparator(path: &Path) -> CliResult<ComparatorConfig> {
        if !path.is_file() {
            return Err(CliError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Ok(ComparatorConfig::load(path)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use cotejo::{Correlation, StyleKey};

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 4), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);
        assert_eq!(Verbosity::default().log_filter(), "warn");
        assert_eq!(Verbosity::Quiet.log_filter(), "error");
    }

    #[test]
    fn test_explicit_color() {
        assert!(ColorChoice::Always.should_color());
        assert!(!ColorChoice::Never.should_color());
    }

    #[test]
    fn test_from_cli_defaults() {
        let cli = Cli::parse_from(["cotejo", "-v", "--color", "never", "config"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.comparator, ComparatorConfig::default());
    }

    #[test]
    fn test_from_cli_loads_comparator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotejo.yaml");
        std::fs::write(&path, "correlation: identity\nmonitored: [textDecoration]\n").unwrap();

        let cli = Cli::parse_from(["cotejo", "--config", path.to_str().unwrap(), "config"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.comparator.correlation, Correlation::Identity);
        assert_eq!(config.comparator.monitored, vec![StyleKey::TextDecoration]);
    }

    #[test]
    fn test_missing_config_file() {
        let err = CliConfig::load_comparator(Path::new("/nonexistent/cotejo.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
