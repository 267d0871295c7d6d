//! Error types for virtual shell operations.
//!
//! This module provides the [`Error`] enum which represents every failure a
//! session can report, along with a convenient [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! Errors fall into two groups. Bootstrap errors ([`Error::Io`] and, with the
//! `zip` feature, [`Error::Zip`]) happen while the archive is opened and
//! listed; without an index no command can run, so these abort startup.
//! Everything else is a command error: [`Session::dispatch`] catches it and the
//! session keeps going.
//!
//! ```rust
//! use vshell::{Dispatch, Error, MemorySource, Session, SessionOptions};
//!
//! let source = MemorySource::new().file("docs/a.txt", "hello");
//! let mut session = Session::bootstrap(source, SessionOptions::default()).unwrap();
//!
//! match session.dispatch("cd nowhere") {
//!     Dispatch::Failed(Error::UnknownDirectory { path }) => assert_eq!(path, "/nowhere"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! assert_eq!(session.current_dir().as_str(), "/");
//! ```
//!
//! [`Session::dispatch`]: crate::Session::dispatch

use std::io;

/// The main error type for virtual shell operations.
///
/// # Error Categories
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | Input | [`MissingCommand`][Self::MissingCommand], [`UnknownCommand`][Self::UnknownCommand], [`MissingArgument`][Self::MissingArgument], [`UnexpectedArgument`][Self::UnexpectedArgument], [`InvalidArgument`][Self::InvalidArgument] | Malformed command line |
/// | Lookup | [`UnknownDirectory`][Self::UnknownDirectory], [`UnknownFile`][Self::UnknownFile], [`EntryNotFound`][Self::EntryNotFound] | Path not in the index or archive |
/// | Mutation | [`NotEmpty`][Self::NotEmpty], [`Busy`][Self::Busy] | Refused `rmdir` |
/// | Content | [`DecodeError`][Self::DecodeError] | Entry is not UTF-8 text |
/// | Archive | [`Io`][Self::Io], [`Zip`][Self::Zip] | Backing archive unavailable |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while accessing the backing archive.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The ZIP container could not be parsed or read.
    #[cfg(feature = "zip")]
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The input line was empty.
    #[error("No command")]
    MissingCommand,

    /// The verb is not one of the supported commands.
    #[error("{command}: unknown command")]
    UnknownCommand {
        /// The full command line as entered.
        command: String,
    },

    /// A path-bearing command was given no path.
    #[error("{command}: missing operand")]
    MissingArgument {
        /// The verb that required an argument.
        command: &'static str,
    },

    /// A command received more arguments than it accepts.
    #[error("{command}: unexpected argument '{argument}'")]
    UnexpectedArgument {
        /// The verb that was invoked.
        command: &'static str,
        /// The first surplus argument.
        argument: String,
    },

    /// An option value could not be parsed.
    #[error("{command}: invalid argument '{argument}'")]
    InvalidArgument {
        /// The verb that was invoked.
        command: &'static str,
        /// The rejected value.
        argument: String,
    },

    /// The resolved path does not name a directory in the index.
    #[error("Error: unknown directory {path}")]
    UnknownDirectory {
        /// The canonical path that was looked up.
        path: String,
    },

    /// The resolved path does not name a file in the index.
    #[error("Error: unknown file {path}")]
    UnknownFile {
        /// The canonical path that was looked up.
        path: String,
    },

    /// Removal was attempted on a directory that still has children.
    #[error("Error: Directory {marker} is not empty")]
    NotEmpty {
        /// The directory marker, e.g. `docs/`.
        marker: String,
    },

    /// Removal was attempted on the session's current directory.
    #[error("Error: Directory {marker} is the current directory")]
    Busy {
        /// The directory marker, e.g. `docs/`.
        marker: String,
    },

    /// Entry content is not valid UTF-8 text.
    #[error("Error: {path} is not valid UTF-8 text: {source}")]
    DecodeError {
        /// The canonical path of the file.
        path: String,
        /// The underlying decoding failure.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The archive collaborator has no entry with this name.
    ///
    /// The index and the archive disagree when this is returned, e.g. because
    /// the archive file was replaced after the session started.
    #[error("Entry not found: {path}")]
    EntryNotFound {
        /// The entry name that was requested.
        path: String,
    },

    /// A path could not be represented as a virtual path.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl Error {
    /// Returns `true` for errors that leave a session unable to continue.
    ///
    /// These only arise while the archive is opened or listed. A read that
    /// fails the same way later is still reported per command.
    pub fn is_session_fatal(&self) -> bool {
        match self {
            Error::Io(_) => true,
            #[cfg(feature = "zip")]
            Error::Zip(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the error was caused by the command line itself
    /// rather than by the state of the index or archive.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::MissingCommand
                | Error::UnknownCommand { .. }
                | Error::MissingArgument { .. }
                | Error::UnexpectedArgument { .. }
                | Error::InvalidArgument { .. }
        )
    }
}

/// A specialized Result type for virtual shell operations.
pub type Result<T> = std::result::Result<T, Error>;
