//! Exit codes for the CLI tool.

use vshell::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Some script commands failed
pub const WARNING: i32 = 1;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 2;
/// Archive format error
pub const BAD_ARCHIVE: i32 = 3;
/// Path not found in the archive
pub const NOT_FOUND: i32 = 4;
/// I/O error
pub const IO_ERROR: i32 = 5;
/// Ctrl+C (128 + SIGINT)
pub const USER_INTERRUPT: i32 = 130;
/// Invalid command line or shell command
pub const BAD_ARGS: i32 = 255;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    Warning,
    FatalError,
    BadArchive,
    NotFound,
    IoError,
    UserInterrupt,
    BadArgs,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::Warning => WARNING,
            Self::FatalError => FATAL_ERROR,
            Self::BadArchive => BAD_ARCHIVE,
            Self::NotFound => NOT_FOUND,
            Self::IoError => IO_ERROR,
            Self::UserInterrupt => USER_INTERRUPT,
            Self::BadArgs => BAD_ARGS,
        }
    }
}

/// Converts a vshell error to an exit code
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::Io(_) => ExitCode::IoError,
        Error::Zip(_) => ExitCode::BadArchive,
        Error::DecodeError { .. } => ExitCode::BadArchive,
        Error::UnknownDirectory { .. } | Error::UnknownFile { .. } => ExitCode::NotFound,
        Error::EntryNotFound { .. } => ExitCode::NotFound,
        Error::NotEmpty { .. } | Error::Busy { .. } => ExitCode::FatalError,
        Error::MissingCommand
        | Error::UnknownCommand { .. }
        | Error::MissingArgument { .. }
        | Error::UnexpectedArgument { .. }
        | Error::InvalidArgument { .. }
        | Error::InvalidPath(_) => ExitCode::BadArgs,
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}
