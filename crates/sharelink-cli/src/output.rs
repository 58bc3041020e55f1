//! Terminal output for run reports and profiles
//!
//! Human output goes to stdout, with failures and errors on stderr. JSON
//! output prints one pretty document per command on stdout.

use sharelink_core::{domain::AnnotateReport, ports::UserInfo};

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Renders command results in one output format
pub trait OutputFormatter {
    /// Progress note shown before a run starts
    fn notice(&self, message: &str);
    /// Fatal error, printed just before exiting
    fn error(&self, message: &str);
    /// Result of `resolve` or `annotate`
    fn report(&self, report: &AnnotateReport);
    /// Result of `whoami`
    fn profile(&self, user: &UserInfo);
}

/// Plain-text formatter
pub struct HumanFormatter;

impl HumanFormatter {
    /// Splits a report into (stdout, stderr) lines
    fn render_report(report: &AnnotateReport) -> (Vec<String>, Vec<String>) {
        let mut out: Vec<String> = report
            .resolved
            .iter()
            .map(|(id, path)| format!("  {id} -> {path}"))
            .collect();

        let verb = if report.dry_run { "Would rewrite" } else { "Rewrote" };
        out.extend(
            report
                .rewritten
                .iter()
                .map(|file| format!("  {verb} {}", file.display())),
        );

        let mut err: Vec<String> = report
            .failures
            .iter()
            .map(|failure| format!("\u{26a0} Warning: {failure}"))
            .collect();

        if report.is_clean() {
            out.push(format!("\u{2713} {}", report.summary()));
        } else {
            let count = report.failures.len();
            err.push(format!(
                "\u{26a0} Warning: {} ({count} failure{})",
                report.summary(),
                if count == 1 { "" } else { "s" }
            ));
        }

        (out, err)
    }
}

impl OutputFormatter for HumanFormatter {
    fn notice(&self, message: &str) {
        println!("  {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("\u{2717} Error: {message}");
    }

    fn report(&self, report: &AnnotateReport) {
        let (out, err) = Self::render_report(report);
        for line in out {
            println!("{line}");
        }
        for line in err {
            eprintln!("{line}");
        }
    }

    fn profile(&self, user: &UserInfo) {
        println!("{}", user.display_name);
    }
}

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    fn print(value: serde_json::Value) {
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    }
}

impl OutputFormatter for JsonFormatter {
    fn notice(&self, _message: &str) {}

    fn error(&self, message: &str) {
        eprintln!(
            "{}",
            serde_json::json!({"success": false, "error": message})
        );
    }

    fn report(&self, report: &AnnotateReport) {
        Self::print(serde_json::to_value(report).unwrap_or_default());
    }

    fn profile(&self, user: &UserInfo) {
        Self::print(serde_json::to_value(user).unwrap_or_default());
    }
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Human => Box::new(HumanFormatter),
    }
}
