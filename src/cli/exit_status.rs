use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): nothing to report, or the requested change was made
/// - `Failure` (1): `check` found unused keys, or a clean was aborted
/// - `Error` (2): configuration or translation file could not be used
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
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
