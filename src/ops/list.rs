//! Directory listing.

use std::collections::HashSet;

use crate::{EntryIndex, Error, Result, VirtualPath};

/// Returns the names of the immediate children of `dir`.
///
/// At the root this is the set of top-level directory names; files stored
/// directly at the top level have no directory segment and are not listed.
/// Below the root, both files and subdirectories are listed.
///
/// The result is unordered.
///
/// # Errors
///
/// Returns [`Error::UnknownDirectory`] if `dir` is not a directory in the index.
///
/// # Example
///
/// ```
/// use vshell::{EntryIndex, VirtualPath, ops::list_directory};
///
/// let index = EntryIndex::build(["docs/a.txt", "docs/sub/b.txt", "top.txt"]);
///
/// let root = list_directory(&index, &VirtualPath::root()).unwrap();
/// assert_eq!(root.len(), 1);
/// assert!(root.contains("docs"));
///
/// let docs = list_directory(&index, &VirtualPath::new("/docs").unwrap()).unwrap();
/// assert!(docs.contains("a.txt") && docs.contains("sub"));
/// ```
pub fn list_directory<'a>(index: &'a EntryIndex, dir: &VirtualPath) -> Result<HashSet<&'a str>> {
    if dir.is_root() {
        return Ok(index
            .iter()
            .filter_map(|entry| entry.split_once('/').map(|(first, _)| first))
            .filter(|segment| !segment.is_empty())
            .collect());
    }

    let marker = dir.dir_marker();
    if !index.contains(&marker) {
        return Err(Error::UnknownDirectory {
            path: dir.to_string(),
        });
    }

    let depth = dir.depth();
    Ok(index
        .entries_under(&marker)
        .filter_map(|entry| entry.split('/').nth(depth))
        .filter(|segment| !segment.is_empty())
        .collect())
}
