//! Command handlers - kept out of main.rs for testability

use crate::commands::{CheckArgs, CompareArgs, ConfigArgs, ConfigFormat, FormatArg, SlugArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{Reporter, RunTally};
use cotejo::{
    expected_url_fragment, ComparatorConfig, CotejoError, Correlation, Expectation, Phase,
    PhaseSummary, RecordedRun,
};
use std::path::Path;
use std::time::Instant;

fn comparator_config(config: &CliConfig, identity: bool) -> ComparatorConfig {
    if identity {
        config
            .comparator
            .clone()
            .with_correlation(Correlation::Identity)
    } else {
        config.comparator.clone()
    }
}

/// Compare one phase of a run and print the result
///
/// With an expectation, violations are printed and returned as an error.
pub fn run_compare(
    config: &CliConfig,
    args: &CompareArgs,
    reporter: &Reporter,
) -> CliResult<PhaseSummary> {
    let phase = Phase::from(args.phase);
    tracing::debug!(run = %args.run.display(), %phase, "comparing recorded run");
    let comparator = RecordedRun::load(&args.run)?
        .into_comparator(comparator_config(config, args.identity))?;

    let summary = match args.expect.expectation() {
        None => comparator.summarize(phase),
        Some(Expectation::Changed) => comparator.assert_all_changed(phase),
        Some(Expectation::Reverted) => comparator.assert_all_reverted(phase),
    };

    match summary {
        Ok(summary) => {
            match args.format {
                FormatArg::Text => reporter.emit(&reporter.render_summary(&summary)),
                FormatArg::Json => reporter.emit(&summary.to_json()?),
            }
            Ok(summary)
        }
        Err(err) => {
            if let Some(report) = err.violations() {
                match args.format {
                    FormatArg::Text => reporter.violations(report),
                    FormatArg::Json => reporter.emit(&serde_json::to_string_pretty(report)?),
                }
            }
            Err(err.into())
        }
    }
}

fn check_run(
    path: &Path,
    comparator: ComparatorConfig,
) -> Result<(PhaseSummary, PhaseSummary), CotejoError> {
    let comparator = RecordedRun::load(path)?.into_comparator(comparator)?;
    let changed = comparator.assert_all_changed(Phase::Toggled)?;
    let restored = comparator.assert_all_reverted(Phase::Reverted)?;
    Ok((changed, restored))
}

/// Check every run: toggled must change, reverted must restore
///
/// Returns the number of passing runs. A run that cannot be read or
/// replayed fails the whole check with its error rather than as a style
/// violation.
pub fn run_check(
    config: &CliConfig,
    args: &CheckArgs,
    reporter: &mut Reporter,
) -> CliResult<usize> {
    let start = Instant::now();
    let comparator = comparator_config(config, args.identity);

    reporter.title("Style toggle check");
    reporter.begin_runs(args.runs.len());

    let mut tally = RunTally::default();
    let mut unreadable: Option<CotejoError> = None;
    for path in &args.runs {
        let name = path.display().to_string();
        let outcome = check_run(path, comparator.clone());
        reporter.advance(&name);
        match outcome {
            Ok((changed, restored)) => {
                tally.passed += 1;
                reporter.pass(&format!(
                    "{name}: {} changed, {} restored, {} no-data",
                    changed.changed,
                    restored.unchanged,
                    changed.skipped + restored.skipped
                ));
            }
            Err(err) => {
                tally.failed += 1;
                match err.violations() {
                    Some(report) => {
                        reporter.fail(&name);
                        reporter.violations(report);
                    }
                    None => {
                        reporter.fail(&format!("{name}: {err}"));
                        unreadable.get_or_insert(err);
                    }
                }
                if args.fail_fast {
                    break;
                }
            }
        }
    }
    reporter.end_runs();
    tally.elapsed = start.elapsed();
    reporter.tally(&tally);

    if let Some(err) = unreadable {
        return Err(err.into());
    }
    if !tally.is_clean() {
        return Err(CliError::check_failed(format!(
            "{} of {} run(s) failed",
            tally.failed,
            tally.total()
        )));
    }
    Ok(tally.passed)
}

/// Print the URL fragment for a resource card
pub fn run_slug(args: &SlugArgs, reporter: &Reporter) -> CliResult<String> {
    if args.category.trim().is_empty() {
        return Err(CliError::invalid_argument("category must not be empty"));
    }
    let fragment = expected_url_fragment(&args.category, &args.title);
    reporter.emit(&fragment);
    Ok(fragment)
}

/// Print the effective comparator configuration
pub fn run_config(
    config: &CliConfig,
    args: &ConfigArgs,
    reporter: &Reporter,
) -> CliResult<String> {
    let body = match args.format {
        ConfigFormat::Yaml => serde_yaml_ng::to_string(&config.comparator)?,
        ConfigFormat::Json => serde_json::to_string_pretty(&config.comparator)?,
    };
    reporter.emit(&body);
    Ok(body)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::{ExpectArg, PhaseArg};
    use cotejo::{StyleAttributes, StyleKey};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_run(dir: &TempDir, name: &str, restored: bool) -> PathBuf {
        let link = StyleAttributes::new("A", "Home");
        let underlined = link
            .clone()
            .with_style(StyleKey::TextDecoration, "underline");
        let run = RecordedRun {
            baseline: vec![link.clone()],
            toggled: Some(vec![underlined.clone()]),
            reverted: Some(vec![if restored { link } else { underlined }]),
        };
        let path = dir.path().join(name);
        std::fs::write(&path, serde_json::to_string(&run).unwrap()).unwrap();
        path
    }

    fn quiet() -> Reporter {
        Reporter::new(false, true)
    }

    fn compare_args(run: PathBuf, phase: PhaseArg, expect: ExpectArg) -> CompareArgs {
        CompareArgs {
            run,
            phase,
            expect,
            format: FormatArg::Json,
            identity: false,
        }
    }

    mod compare_tests {
        use super::*;

        #[test]
        fn test_compare_report_only() {
            let dir = TempDir::new().unwrap();
            let run = write_run(&dir, "run.json", false);
            let summary = run_compare(
                &CliConfig::new(),
                &compare_args(run, PhaseArg::Reverted, ExpectArg::None),
                &quiet(),
            )
            .unwrap();
            assert_eq!(summary.changed, 1);
        }

        #[test]
        fn test_compare_expect_violation() {
            let dir = TempDir::new().unwrap();
            let run = write_run(&dir, "run.json", false);
            let err = run_compare(
                &CliConfig::new(),
                &compare_args(run, PhaseArg::Reverted, ExpectArg::Reverted),
                &quiet(),
            )
            .unwrap_err();
            assert!(err.is_violation());
        }

        #[test]
        fn test_compare_missing_phase() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("partial.yaml");
            std::fs::write(&path, "baseline: []\n").unwrap();
            let err = run_compare(
                &CliConfig::new(),
                &compare_args(path, PhaseArg::Toggled, ExpectArg::Changed),
                &quiet(),
            )
            .unwrap_err();
            assert!(matches!(
                err,
                CliError::Cotejo(CotejoError::PhaseNotRecorded { .. })
            ));
        }
    }

    mod check_tests {
        use super::*;

        #[test]
        fn test_check_all_pass() {
            let dir = TempDir::new().unwrap();
            let args = CheckArgs {
                runs: vec![write_run(&dir, "a.json", true), write_run(&dir, "b.json", true)],
                fail_fast: false,
                identity: false,
            };
            let passed = run_check(&CliConfig::new(), &args, &mut quiet()).unwrap();
            assert_eq!(passed, 2);
        }

        #[test]
        fn test_check_reports_failures() {
            let dir = TempDir::new().unwrap();
            let args = CheckArgs {
                runs: vec![
                    write_run(&dir, "a.json", false),
                    write_run(&dir, "b.json", true),
                ],
                fail_fast: false,
                identity: false,
            };
            let err = run_check(&CliConfig::new(), &args, &mut quiet()).unwrap_err();
            assert_eq!(err.to_string(), "Style check failed: 1 of 2 run(s) failed");
        }

        #[test]
        fn test_check_fail_fast_stops() {
            let dir = TempDir::new().unwrap();
            let args = CheckArgs {
                runs: vec![
                    write_run(&dir, "a.json", false),
                    write_run(&dir, "b.json", true),
                ],
                fail_fast: true,
                identity: false,
            };
            let err = run_check(&CliConfig::new(), &args, &mut quiet()).unwrap_err();
            assert_eq!(err.to_string(), "Style check failed: 1 of 1 run(s) failed");
        }

        #[test]
        fn test_check_unreadable_run_is_not_a_violation() {
            let dir = TempDir::new().unwrap();
            let args = CheckArgs {
                runs: vec![
                    write_run(&dir, "a.json", false),
                    dir.path().join("missing.json"),
                ],
                fail_fast: false,
                identity: false,
            };
            let err = run_check(&CliConfig::new(), &args, &mut quiet()).unwrap_err();
            assert!(matches!(err, CliError::Cotejo(_)));
            assert!(!err.is_violation());
        }
    }

    mod misc_tests {
        use super::*;

        #[test]
        fn test_slug() {
            let args = SlugArgs {
                category: "Videos".into(),
                title: "Intro to KMS".into(),
            };
            assert_eq!(run_slug(&args, &quiet()).unwrap(), "/video/intro-to-kms/");
        }

        #[test]
        fn test_slug_rejects_empty_category() {
            let args = SlugArgs {
                category: " ".into(),
                title: "x".into(),
            };
            assert!(matches!(
                run_slug(&args, &quiet()).unwrap_err(),
                CliError::InvalidArgument { .. }
            ));
        }

        #[test]
        fn test_config_yaml() {
            let body = run_config(
                &CliConfig::new(),
                &ConfigArgs {
                    format: ConfigFormat::Yaml,
                },
                &quiet(),
            )
            .unwrap();
            assert!(body.contains("correlation: positional"));
            assert!(body.contains("label_max_chars: 50"));
        }
    }
}
