//! Report formatting and printing utilities.
//!
//! Mismatches go to stderr, the success line to stdout. Separate from the
//! validator so it can be used as a library without printing.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{LocaleReport, ValidationReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Warning mark used for extra keys.
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

/// Print a validation report: the success line on stdout when in sync,
/// otherwise the per-locale breakdown on stderr.
pub fn print(report: &ValidationReport) {
    if report.is_in_sync() {
        print_success_to(report, &mut io::stdout().lock());
    } else {
        report_to(report, &mut io::stderr().lock());
    }
}

/// Print every out-of-sync locale and a summary line to a custom writer.
pub fn report_to<W: Write>(report: &ValidationReport, writer: &mut W) {
    let mut out_of_sync = 0;
    for locale in report.out_of_sync() {
        print_locale(locale, writer);
        out_of_sync += 1;
    }
    if out_of_sync == 0 {
        return;
    }

    let total = report.locales.len();
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} of {} {} out of sync with base locale \"{}\"",
            out_of_sync,
            total,
            if total == 1 { "locale" } else { "locales" },
            report.base_locale
        )
        .red()
        .bold()
    );
}

/// Print the in-sync message to a custom writer.
pub fn print_success_to<W: Write>(report: &ValidationReport, writer: &mut W) {
    let files = report.locale_files_checked();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {} - all in sync with \"{}\"",
            files,
            if files == 1 { "file" } else { "files" },
            report.base_locale
        )
        .green()
    );
}

fn print_locale<W: Write>(locale: &LocaleReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} [{}]",
        "Locale:".bold(),
        locale.locale.as_str().cyan()
    );
    for key in &locale.missing {
        let _ = writeln!(
            writer,
            "  {} {} {}",
            FAILURE_MARK.red(),
            "missing key:".red(),
            key
        );
    }
    for key in &locale.extra {
        let _ = writeln!(
            writer,
            "  {} {} {}",
            WARNING_MARK.yellow(),
            "extra key (not in base):".yellow(),
            key
        );
    }
    let _ = writeln!(writer); // Empty line between locales
}
