//! Terminal output: status lines on stderr, report bodies on stdout

use console::{Style, Term};
use cotejo::{ComparisonReport, PhaseSummary, ViolationReport};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::time::Duration;

const BAR_TEMPLATE: &str = "{spinner:.cyan} {pos}/{len} runs {wide_msg}";

/// Outcome counts of a `check` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunTally {
    /// Runs whose phases met both expectations
    pub passed: usize,
    /// Runs that failed or could not be read
    pub failed: usize,
    /// Wall time spent checking
    pub elapsed: Duration,
}

impl RunTally {
    /// Whether every run passed
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Runs checked
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed
    }

    const fn verdict(&self) -> &'static str {
        if self.is_clean() {
            "PASSED"
        } else {
            "FAILED"
        }
    }
}

impl fmt::Display for RunTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} run(s) in {:.2}s ({} passed, {} failed)",
            self.verdict(),
            self.total(),
            self.elapsed.as_secs_f64(),
            self.passed,
            self.failed
        )
    }
}

#[derive(Debug, Clone, Copy)]
enum Mark {
    Pass,
    Fail,
}

impl Mark {
    const fn glyph(self, color: bool) -> &'static str {
        match (self, color) {
            (Self::Pass, true) => "✓",
            (Self::Fail, true) => "✗",
            (Self::Pass, false) => "PASS",
            (Self::Fail, false) => "FAIL",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Pass => Style::new().green().bold(),
            Self::Fail => Style::new().red().bold(),
        }
    }
}

fn paint(report: &ComparisonReport) -> String {
    let style = match (report.is_no_data(), report.has_changed) {
        (true, _) => Style::new().yellow(),
        (false, true) => Style::new().cyan(),
        (false, false) => Style::new().dim(),
    };
    style.apply_to(report.to_string()).to_string()
}

/// Writes command output to the terminal
#[derive(Debug)]
pub struct Reporter {
    err: Term,
    out: Term,
    bar: Option<ProgressBar>,
    color: bool,
    quiet: bool,
}

impl Reporter {
    /// Create a reporter
    #[must_use]
    pub fn new(color: bool, quiet: bool) -> Self {
        Self {
            err: Term::stderr(),
            out: Term::stdout(),
            bar: None,
            color,
            quiet,
        }
    }

    /// Whether non-error status lines are suppressed
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Show a bar over `total` runs; a single run gets none
    pub fn begin_runs(&mut self, total: usize) {
        if self.quiet || total < 2 {
            return;
        }
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        self.bar = Some(ProgressBar::new(total as u64).with_style(style));
    }

    /// Mark one run as done
    pub fn advance(&self, run: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(run.to_string());
            bar.inc(1);
        }
    }

    /// Remove the bar
    pub fn end_runs(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn line(&self, text: &str) {
        match &self.bar {
            Some(bar) => bar.println(text),
            None => {
                let _ = self.err.write_line(text);
            }
        }
    }

    fn mark(&self, mark: Mark, message: &str) {
        let glyph = mark.glyph(self.color);
        let prefix = if self.color {
            mark.style().apply_to(glyph).to_string()
        } else {
            glyph.to_string()
        };
        self.line(&format!("{prefix} {message}"));
    }

    /// Status line for a passing run
    pub fn pass(&self, message: &str) {
        if !self.quiet {
            self.mark(Mark::Pass, message);
        }
    }

    /// Status line for a failing run; printed even when quiet
    pub fn fail(&self, message: &str) {
        self.mark(Mark::Fail, message);
    }

    /// Section title
    pub fn title(&self, text: &str) {
        if self.quiet {
            return;
        }
        let rendered = if self.color {
            Style::new().bold().underlined().apply_to(text).to_string()
        } else {
            format!("=== {text} ===")
        };
        self.line(&rendered);
    }

    /// Report body on stdout
    pub fn emit(&self, body: &str) {
        let _ = self.out.write_line(body.trim_end());
    }

    /// Plain-text summary of a phase, each element colored by its status
    #[must_use]
    pub fn render_summary(&self, summary: &PhaseSummary) -> String {
        let text = summary.render_text();
        if !self.color {
            return text.trim_end().to_string();
        }
        let header = text.lines().next().unwrap_or_default().to_string();
        std::iter::once(header)
            .chain(summary.reports.iter().map(paint))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every line of a violation report as a failure
    pub fn violations(&self, report: &ViolationReport) {
        for line in report.to_string().lines() {
            self.fail(line);
        }
    }

    /// Final verdict line of a `check`
    pub fn tally(&self, tally: &RunTally) {
        if self.quiet && tally.is_clean() {
            return;
        }
        let text = tally.to_string();
        let rendered = if self.color {
            let mark = if tally.is_clean() { Mark::Pass } else { Mark::Fail };
            let rest = text.trim_start_matches(tally.verdict());
            format!("{}{rest}", mark.style().apply_to(tally.verdict()))
        } else {
            text
        };
        self.line("");
        self.line(&rendered);
    }
}
