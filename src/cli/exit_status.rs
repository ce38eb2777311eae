use std::process::ExitCode;

/// Process exit status of `tscat`.
///
/// - `Success` (0): clean run, or only warnings were found
/// - `Failure` (1): errors were found in the catalogs, or a lookup missed
/// - `Error` (2): the command itself failed (bad config, unreadable file, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
