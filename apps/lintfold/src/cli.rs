//! CLI argument parsing via `clap`.

use crate::config::OutputMode;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintfold",
    version,
    about = "Aggregate lint rule messages into per-file results",
    long_about = "lintfold — fold the JSON messages emitted by lint rules into per-file error/warning/fixable counts and gate CI on them.\n\nConfiguration precedence: CLI > lintfold.toml > defaults.",
    after_help = "Examples:\n  lintfold report lint-out/*.json\n  rule-runner | lintfold report --output json\n  lintfold report reports/*.json --max-warnings 0",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current lintfold version.")]
    Version,
    /// Aggregate rule messages and report
    #[command(
        about = "Aggregate and report",
        long_about = "Read rule messages (JSON arrays) from the given files or stdin, group them by file, and print the totals. Exits 1 on errors or when warnings exceed --max-warnings.",
        after_help = "Examples:\n  lintfold report out/a.json out/b.json\n  lintfold report 'out/*.json' --quiet"
    )]
    Report {
        #[arg(help = "Message files or glob patterns; '-' reads stdin (default: config inputs, else stdin)")]
        inputs: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_enum, help = "Output mode (default: human)")]
        output: Option<OutputMode>,
        #[arg(long, help = "Fail when the warning count exceeds this number")]
        max_warnings: Option<usize>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Hide warnings in human output")]
        quiet: bool,
    },
}
