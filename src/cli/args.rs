//! CLI argument definitions using clap.
//!
//! The validator takes flags only: `--base` selects the reference locale and
//! `--messages-root` the directory of `<locale>.json` files. Both override
//! `.glossarc.json`.

use std::path::PathBuf;

use clap::Parser;

/// Check that every translation file exposes the same keys as the base locale
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Base locale other locales are compared against (overrides config file)
    #[arg(long = "base", value_name = "LOCALE")]
    pub base_locale: Option<String>,

    /// Directory containing <locale>.json files (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
