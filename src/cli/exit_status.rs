use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): every action completed (undecodable files are only warned about)
/// - `Error` (2): the run stopped on a configuration, I/O or input error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// All requested actions completed.
    Success,
    /// The run was aborted by an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
