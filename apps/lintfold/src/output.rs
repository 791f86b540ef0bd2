//! Output rendering for aggregated lint results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is the
//! `LintResult` itself; the human form lists counted messages per file and
//! ends with a problem summary.

use crate::config::OutputMode;
use crate::models::{FileResult, LintResult, Message, Severity};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::fmt::Write as _;

fn use_colors(output: OutputMode) -> bool {
    output != OutputMode::Json && std::env::var_os("NO_COLOR").is_none()
}

/// Print an aggregated result in the requested format.
pub fn print_result(res: &LintResult, output: OutputMode, quiet: bool) -> serde_json::Result<()> {
    match output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&compose_result_json(res)?)?);
        }
        OutputMode::Human => print!("{}", compose_human(res, quiet, use_colors(output))),
    }
    Ok(())
}

/// Compose result JSON (pure) for testing/snapshot purposes.
pub fn compose_result_json(res: &LintResult) -> serde_json::Result<JsonVal> {
    serde_json::to_value(res)
}

/// Compose the human report. Ignored messages are never listed; `quiet`
/// additionally hides warnings without changing the counts.
pub fn compose_human(res: &LintResult, quiet: bool, color: bool) -> String {
    let mut out = String::new();
    for file in res.files.values() {
        let shown: Vec<&Message> = file
            .messages
            .iter()
            .filter(|m| is_listed(&m.severity, quiet))
            .collect();
        if shown.is_empty() {
            continue;
        }
        push_file_header(&mut out, file, color);
        for msg in shown {
            push_message_line(&mut out, msg, color);
        }
        out.push('\n');
    }

    let problems = res.error_count + res.warning_count;
    if problems == 0 {
        return out;
    }
    let summary = format!(
        "✖ {} {} ({} {}, {} {})",
        problems,
        plural(problems, "problem"),
        res.error_count,
        plural(res.error_count, "error"),
        res.warning_count,
        plural(res.warning_count, "warning"),
    );
    if color && res.has_errors() {
        let _ = writeln!(out, "{}", summary.red().bold());
    } else if color {
        let _ = writeln!(out, "{}", summary.yellow().bold());
    } else {
        let _ = writeln!(out, "{}", summary);
    }
    if res.fixable_error_count + res.fixable_warning_count > 0 {
        let _ = writeln!(
            out,
            "  {} {} and {} {} potentially fixable with the `--fix` option.",
            res.fixable_error_count,
            plural(res.fixable_error_count, "error"),
            res.fixable_warning_count,
            plural(res.fixable_warning_count, "warning"),
        );
    }
    out
}

fn is_listed(severity: &Severity, quiet: bool) -> bool {
    match severity {
        Severity::Ignore => false,
        Severity::Warning => !quiet,
        Severity::Error | Severity::Unknown(_) => true,
    }
}

fn push_file_header(out: &mut String, file: &FileResult, color: bool) {
    if color {
        let _ = writeln!(out, "{}", file.file_path.bold().underline());
    } else {
        let _ = writeln!(out, "{}", file.file_path);
    }
}

fn push_message_line(out: &mut String, msg: &Message, color: bool) {
    let pos = format!("{}:{}", msg.line.unwrap_or(0), msg.column.unwrap_or(0));
    let label = msg.severity.label();
    let (icon, sev) = match (&msg.severity, color) {
        (Severity::Error, true) => ("✖".red().to_string(), label.red().bold().to_string()),
        (Severity::Warning, true) => ("▲".yellow().to_string(), label.yellow().bold().to_string()),
        (_, true) => ("◆".blue().to_string(), label.blue().bold().to_string()),
        (Severity::Error, false) => ("✖".to_string(), label.to_string()),
        (Severity::Warning, false) => ("▲".to_string(), label.to_string()),
        (_, false) => ("◆".to_string(), label.to_string()),
    };
    let rule = if color {
        msg.rule.bright_black().to_string()
    } else {
        msg.rule.clone()
    };
    let _ = writeln!(
        out,
        "  {:>7}  {} {}  {}  ❲{}❳",
        pos, icon, sev, msg.message, rule
    );
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        format!("{}:", label)
    } else {
        paint(&format!("{}:", label))
    }
}

/// Stderr prefix for fatal problems.
pub fn error_prefix() -> String {
    prefix("error", |s: &str| s.red().bold().to_string())
}

/// Stderr prefix for advisory notes.
pub fn note_prefix() -> String {
    prefix("note", |s: &str| s.yellow().to_string())
}

/// Stderr prefix for informational lines.
pub fn info_prefix() -> String {
    prefix("info", |s: &str| s.blue().to_string())
}
