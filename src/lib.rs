//! # vshell
//!
//! A shell-like navigation layer over archives that only store a flat list of
//! entry names.
//!
//! Archives such as zip files describe their contents as names like
//! `docs/sub/a.txt`, optionally with explicit directory markers like `docs/`.
//! This crate builds a directory view over such a list and lets a session
//! move around in it with familiar commands: `cd`, `pwd`, `ls`, `cat`, `head`,
//! `rmdir` and `exit`.
//!
//! ## Quick Start
//!
//! ### Browsing a Zip Archive
//!
//! ```rust,no_run
//! # #[cfg(feature = "zip")]
//! use vshell::{Session, SessionOptions, ZipSource, Result};
//!
//! # #[cfg(feature = "zip")]
//! fn main() -> Result<()> {
//!     let source = ZipSource::open("filesystem.zip")?;
//!     let mut session = Session::bootstrap(source, SessionOptions::new().label("filesystem"))?;
//!
//!     for line in ["ls", "cd docs", "head -n 3 notes.txt", "pwd"] {
//!         for output in session.dispatch(line).render() {
//!             println!("{}", output);
//!         }
//!     }
//!     Ok(())
//! }
//! # #[cfg(not(feature = "zip"))]
//! # fn main() {}
//! ```
//!
//! ### Working In Memory
//!
//! [`MemorySource`] holds entries in memory and is handy for tests and
//! for archives already loaded by other means:
//!
//! ```rust
//! use vshell::{Dispatch, MemorySource, Session, SessionOptions};
//!
//! let source = MemorySource::new()
//!     .file("src/main.rs", "fn main() {}\n")
//!     .directory("target");
//! let mut session = Session::bootstrap(source, SessionOptions::default()).unwrap();
//!
//! assert_eq!(session.dispatch("ls").render(), vec!["src", "target"]);
//! assert_eq!(session.dispatch("rmdir target").render(), vec!["Directory target/ removed"]);
//! assert!(matches!(session.dispatch("exit"), Dispatch::Exit));
//! ```
//!
//! ## Directory Model
//!
//! - The root `/` always exists and is never stored in the [`EntryIndex`].
//! - Every path prefix of a listed name becomes a directory marker, so
//!   `a/b/c.txt` implies the directories `/a` and `/a/b`.
//! - Removal with `rmdir` only affects the session's index; the archive
//!   itself is never written.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. [`Session::dispatch`] never fails: command
//! errors are returned as [`Dispatch::Failed`] and leave the session as it was.
//!
//! ```rust
//! use vshell::{Error, MemorySource, Session, SessionOptions};
//!
//! let mut session = Session::bootstrap(MemorySource::new(), SessionOptions::default()).unwrap();
//! match session.execute(&"cat missing.txt".parse().unwrap()) {
//!     Err(Error::UnknownFile { path }) => assert_eq!(path, "/missing.txt"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `zip` | Yes | [`ZipSource`] backed by the `zip` crate |
//! | `cli` | No | The `vshell` command-line tool |
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod command;
pub mod error;
pub mod index;
pub mod ops;
pub mod options;
pub mod path;
pub mod resolve;
pub mod session;
pub mod source;

pub use command::Command;
pub use error::{Error, Result};
pub use index::EntryIndex;
pub use options::SessionOptions;
pub use path::VirtualPath;
pub use session::{Dispatch, Outcome, Session};
pub use source::{ArchiveSource, MemorySource};

#[cfg(feature = "zip")]
#[cfg_attr(docsrs, doc(cfg(feature = "zip")))]
pub use source::ZipSource;
