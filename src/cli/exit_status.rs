use std::process::ExitCode;

use crate::core::ValidationReport;

/// Exit status for the validator, following common conventions for linter tools.
///
/// - `Success` (0): every locale is in sync with the base
/// - `Failure` (1): at least one locale has missing or extra keys
/// - `Error` (2): validation could not run (missing directory, parse error, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every locale is in sync.
    Success,
    /// Some locale is out of sync.
    Failure,
    /// Validation failed to run.
    Error,
}

impl From<&ValidationReport> for ExitStatus {
    fn from(report: &ValidationReport) -> Self {
        if report.is_in_sync() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
