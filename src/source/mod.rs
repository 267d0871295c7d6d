//! Archive collaborators.
//!
//! This module provides the [`ArchiveSource`] trait the session uses to reach
//! the backing archive, along with built-in implementations.
//!
//! # Built-in Sources
//!
//! - [`ZipSource`] - Reads a ZIP file on disk (requires the `zip` feature)
//! - [`MemorySource`] - Serves entries held in memory
//!
//! # Custom Sources
//!
//! The session only ever asks for the list of names (once, at bootstrap) and
//! for the bytes of one entry (once per `cat`/`head`):
//!
//! ```rust
//! use vshell::{ArchiveSource, Error, Result};
//!
//! struct Fixed;
//!
//! impl ArchiveSource for Fixed {
//!     fn list_entries(&self) -> Result<Vec<String>> {
//!         Ok(vec!["motd.txt".to_string()])
//!     }
//!
//!     fn read_entry(&self, name: &str) -> Result<Vec<u8>> {
//!         match name {
//!             "motd.txt" => Ok(b"welcome\n".to_vec()),
//!             _ => Err(Error::EntryNotFound { path: name.to_string() }),
//!         }
//!     }
//! }
//! ```

mod memory;
#[cfg(feature = "zip")]
mod zip_source;

pub use memory::MemorySource;
#[cfg(feature = "zip")]
pub use zip_source::ZipSource;

use std::rc::Rc;
use std::sync::Arc;

use crate::Result;

/// Read-only access to the entries of an archive.
///
/// Implementations should acquire whatever handle they need inside each call
/// and release it before returning; sessions never hold an archive open
/// between commands.
pub trait ArchiveSource {
    /// Lists the raw entry names. Directory names may carry a trailing `/`.
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Reads the full content of the entry named `name`.
    ///
    /// Returns [`Error::EntryNotFound`](crate::Error::EntryNotFound) if the
    /// archive has no such entry.
    fn read_entry(&self, name: &str) -> Result<Vec<u8>>;
}

impl<S: ArchiveSource + ?Sized> ArchiveSource for &S {
    fn list_entries(&self) -> Result<Vec<String>> {
        (**self).list_entries()
    }

    fn read_entry(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read_entry(name)
    }
}

impl<S: ArchiveSource + ?Sized> ArchiveSource for Box<S> {
    fn list_entries(&self) -> Result<Vec<String>> {
        (**self).list_entries()
    }

    fn read_entry(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read_entry(name)
    }
}

impl<S: ArchiveSource + ?Sized> ArchiveSource for Rc<S> {
    fn list_entries(&self) -> Result<Vec<String>> {
        (**self).list_entries()
    }

    fn read_entry(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read_entry(name)
    }
}

impl<S: ArchiveSource + ?Sized> ArchiveSource for Arc<S> {
    fn list_entries(&self) -> Result<Vec<String>> {
        (**self).list_entries()
    }

    fn read_entry(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read_entry(name)
    }
}
