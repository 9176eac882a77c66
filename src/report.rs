//! Verdict model and line-oriented reporter.
//!
//! Every check produces zero or more verdicts; each verdict is rendered as a
//! single colorized line and then discarded. There is no buffering or
//! aggregation across checks.

use colored::{ColoredString, Colorize};

/// Outcome of a single classified reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Error,
    Info,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warn => "WARN",
            Status::Error => "ERROR",
            Status::Info => "INFO",
        }
    }
}

/// One classified reading: `[category] item: message (status)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub category: String,
    pub item: String,
    pub status: Status,
    pub message: String,
}

impl Verdict {
    pub fn new(
        category: impl Into<String>,
        item: impl Into<String>,
        status: Status,
        message: impl Into<String>,
    ) -> Self {
        Verdict {
            category: category.into(),
            item: item.into(),
            status,
            message: message.into(),
        }
    }

    pub fn ok(category: impl Into<String>, item: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::new(category, item, Status::Ok, msg)
    }

    pub fn warn(
        category: impl Into<String>,
        item: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::new(category, item, Status::Warn, msg)
    }

    pub fn error(
        category: impl Into<String>,
        item: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::new(category, item, Status::Error, msg)
    }

    pub fn info(
        category: impl Into<String>,
        item: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::new(category, item, Status::Info, msg)
    }
}

/// Plain (uncolored) rendering of a verdict line.
pub fn format_line(verdict: &Verdict) -> String {
    format!(
        "[{}] {}: {} ({})",
        verdict.category,
        verdict.item,
        verdict.message,
        verdict.status.label()
    )
}

/// Apply the status color to an already-formatted line.
///
/// OK=green, WARN=yellow, ERROR=red, INFO=default terminal color.
pub fn paint(status: Status, line: &str) -> ColoredString {
    match status {
        Status::Ok => line.green(),
        Status::Warn => line.yellow(),
        Status::Error => line.red(),
        Status::Info => line.normal(),
    }
}

/// Side-effecting sink that prints verdicts and section headers to stdout.
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Reporter
    }

    pub fn section(&self, title: &str) {
        println!();
        println!("{}", format!("=== {} ===", title).bold());
    }

    pub fn verdict(&self, verdict: &Verdict) {
        println!("{}", paint(verdict.status, &format_line(verdict)));
    }
}
