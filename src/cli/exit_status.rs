use std::process::ExitCode;

/// How a run ended, as seen by the calling shell or script.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every requested output was written.
    Success,
    /// The flags cannot form a valid invocation; help and the problems were printed.
    Usage,
    /// Reading a source, the config or the piped input failed, or an output
    /// could not be written.
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
