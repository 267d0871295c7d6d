//! Filesystem operations over an [`EntryIndex`](crate::EntryIndex).
//!
//! Each operation takes an already resolved [`VirtualPath`](crate::VirtualPath);
//! turning raw arguments into paths is the job of [`resolve`](crate::resolve).

mod list;
mod read;
mod remove;

pub use list::list_directory;
pub use read::{DEFAULT_HEAD_LINES, read_all, read_head};
pub use remove::remove_directory;
