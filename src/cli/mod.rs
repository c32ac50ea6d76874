//! Command-line layer of the key-set validator.

use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

pub mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{RunSettings, run, settings};

/// Validate the translation files selected by `args` relative to the
/// working directory and print the report.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir()?;
    let report = run::run(&args, &cwd)?;
    report::print(&report);
    Ok(ExitStatus::from(&report))
}

/// Install the stderr log subscriber.
///
/// `GLOSSA_LOG` takes precedence; otherwise `-v` enables debug output for
/// this crate and warnings are shown by default.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "glossa=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .try_init();
}
