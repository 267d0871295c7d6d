//! Empty directory removal.

use crate::{EntryIndex, Error, Result, VirtualPath};

/// Removes the marker of an empty directory from the index.
///
/// `current` is the session's working directory; removing it would leave the
/// session inside a directory that no longer exists, so that is refused.
/// Only the in-memory index changes, never the backing archive.
///
/// Returns the removed marker (e.g. `docs/old/`).
///
/// # Errors
///
/// - [`Error::UnknownDirectory`] if `dir` has no marker in the index
/// - [`Error::NotEmpty`] if any other entry lives below `dir`
/// - [`Error::Busy`] if `dir` is the current directory
pub fn remove_directory(
    index: &mut EntryIndex,
    dir: &VirtualPath,
    current: &VirtualPath,
) -> Result<String> {
    let marker = dir.dir_marker();

    if dir.is_root() || !index.contains(&marker) {
        return Err(Error::UnknownDirectory {
            path: dir.to_string(),
        });
    }

    if index.has_children(&marker) {
        return Err(Error::NotEmpty { marker });
    }

    if current.starts_with(dir) {
        return Err(Error::Busy { marker });
    }

    index.remove(&marker);
    log::debug!("Removed directory marker '{}'", marker);
    Ok(marker)
}
