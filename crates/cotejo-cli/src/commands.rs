//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use cotejo::{Expectation, Phase};
use std::path::PathBuf;

/// Cotejo: compare recorded style snapshots of UI toggle runs
#[derive(Parser, Debug)]
#[command(name = "cotejo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Comparator configuration file (.yaml, .yml or .json)
    #[arg(long, global = true, env = "COTEJO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare one phase of a recorded run against its baseline
    Compare(CompareArgs),

    /// Check that toggled styles changed and reverted styles were restored
    Check(CheckArgs),

    /// Print the URL fragment expected for a resource
    Slug(SlugArgs),

    /// Show the effective comparator configuration
    Config(ConfigArgs),
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Recorded run file (.json, .yaml or .yml)
    pub run: PathBuf,

    /// Phase to compare against baseline
    #[arg(short, long, default_value = "toggled")]
    pub phase: PhaseArg,

    /// Expectation to assert on the phase
    #[arg(short, long, default_value = "none")]
    pub expect: ExpectArg,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,

    /// Match records by element identity (DOM path) instead of capture position
    #[arg(long)]
    pub identity: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Recorded run files
    #[arg(required = true)]
    pub runs: Vec<PathBuf>,

    /// Stop at the first failing run
    #[arg(long)]
    pub fail_fast: bool,

    /// Match records by element identity (DOM path) instead of capture position
    #[arg(long)]
    pub identity: bool,
}

/// Arguments for the slug command
#[derive(Parser, Debug)]
pub struct SlugArgs {
    /// Category label as shown on the card (e.g. "Videos")
    #[arg(short, long)]
    pub category: String,

    /// Resource title as shown on the card
    pub title: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output format
    #[arg(short, long, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Phase selectable for comparison
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PhaseArg {
    /// Toggle switched on
    #[default]
    Toggled,
    /// Toggle switched back off
    Reverted,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Toggled => Self::Toggled,
            PhaseArg::Reverted => Self::Reverted,
        }
    }
}

/// Expectation selectable for comparison
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExpectArg {
    /// Every element must differ from baseline
    Changed,
    /// Every element must match baseline
    Reverted,
    /// Report only
    #[default]
    None,
}

impl ExpectArg {
    /// Expectation to assert, if any
    #[must_use]
    pub const fn expectation(self) -> Option<Expectation> {
        match self {
            Self::Changed => Some(Expectation::Changed),
            Self::Reverted => Some(Expectation::Reverted),
            Self::None => None,
        }
    }
}

/// Comparison output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Configuration output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    /// YAML output
    #[default]
    Yaml,
    /// JSON output
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_compare_defaults() {
            let cli = Cli::parse_from(["cotejo", "compare", "run.json"]);
            let Commands::Compare(args) = cli.command else {
                panic!("expected compare command");
            };
            assert_eq!(args.run, PathBuf::from("run.json"));
            assert_eq!(args.phase, PhaseArg::Toggled);
            assert_eq!(args.expect, ExpectArg::None);
            assert_eq!(args.format, FormatArg::Text);
            assert!(!args.identity);
        }

        #[test]
        fn test_parse_compare_options() {
            let cli = Cli::parse_from([
                "cotejo",
                "compare",
                "run.yaml",
                "--phase",
                "reverted",
                "--expect",
                "reverted",
                "--format",
                "json",
                "--identity",
            ]);
            let Commands::Compare(args) = cli.command else {
                panic!("expected compare command");
            };
            assert_eq!(Phase::from(args.phase), Phase::Reverted);
            assert_eq!(args.expect.expectation(), Some(Expectation::Reverted));
            assert_eq!(args.format, FormatArg::Json);
            assert!(args.identity);
        }

        #[test]
        fn test_parse_check_many_runs() {
            let cli = Cli::parse_from(["cotejo", "-vv", "check", "a.json", "b.yaml", "--fail-fast"]);
            assert_eq!(cli.verbose, 2);
            let Commands::Check(args) = cli.command else {
                panic!("expected check command");
            };
            assert_eq!(args.runs.len(), 2);
            assert!(args.fail_fast);
        }

        #[test]
        fn test_check_requires_run() {
            assert!(Cli::try_parse_from(["cotejo", "check"]).is_err());
        }

        #[test]
        fn test_parse_slug() {
            let cli = Cli::parse_from(["cotejo", "slug", "--category", "Videos", "Intro to KMS"]);
            let Commands::Slug(args) = cli.command else {
                panic!("expected slug command");
            };
            assert_eq!(args.category, "Videos");
            assert_eq!(args.title, "Intro to KMS");
        }

        #[test]
        fn test_global_flags_after_subcommand() {
            let cli = Cli::parse_from([
                "cotejo",
                "config",
                "--quiet",
                "--color",
                "never",
                "--config",
                "cotejo.yaml",
            ]);
            assert!(cli.quiet);
            assert!(matches!(cli.color, ColorArg::Never));
            assert_eq!(cli.config, Some(PathBuf::from("cotejo.yaml")));
        }
    }
}
