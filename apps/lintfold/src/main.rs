//! lintfold CLI binary entry point.
//! Loads rule messages, aggregates them, and prints the result.

use clap::Parser;
use lintfold::aggregate::aggregate;
use lintfold::cli::{Cli, Commands};
use lintfold::config::{self, OutputMode};
use lintfold::input;
use lintfold::output::{self, error_prefix, info_prefix, note_prefix};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            inputs,
            repo_root,
            output,
            max_warnings,
            quiet,
        } => {
            let code = run_report(
                repo_root.as_deref(),
                &inputs,
                output,
                max_warnings,
                if quiet { Some(true) } else { None },
            );
            std::process::exit(code);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("{} failed to install logger: {}", note_prefix(), e);
    }
}

/// Run the report command and return the process exit code.
fn run_report(
    repo_root: Option<&str>,
    inputs: &[String],
    output: Option<OutputMode>,
    max_warnings: Option<usize>,
    quiet: Option<bool>,
) -> i32 {
    let eff = match config::resolve_effective(repo_root, inputs, output, max_warnings, quiet) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            return 2;
        }
    };
    let human = eff.output == OutputMode::Human;
    if human && !eff.config_found {
        eprintln!("{} No lintfold.toml found; using defaults.", note_prefix());
    }
    if human && eff.inputs.is_empty() {
        eprintln!("{} Reading rule messages from stdin.", info_prefix());
    }

    let messages = match input::load_messages(&eff.repo_root, &eff.inputs) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            return 2;
        }
    };
    let result = match aggregate(messages) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            return 2;
        }
    };
    if let Err(e) = output::print_result(&result, eff.output, eff.quiet) {
        eprintln!("{} failed to render result: {}", error_prefix(), e);
        return 2;
    }

    if result.is_passing(eff.max_warnings) {
        return 0;
    }
    if let (false, Some(max)) = (result.has_errors(), eff.max_warnings) {
        eprintln!(
            "{} {} warnings found; the maximum allowed is {}.",
            error_prefix(),
            result.warning_count,
            max
        );
    }
    1
}
