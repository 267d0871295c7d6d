//! File reading through an archive source.

use std::io::{BufRead, Cursor};

use crate::{ArchiveSource, EntryIndex, Error, Result, VirtualPath};

/// Number of lines `head` prints when no count is given.
pub const DEFAULT_HEAD_LINES: usize = 10;

fn fetch<S>(source: &S, index: &EntryIndex, path: &VirtualPath) -> Result<Vec<u8>>
where
    S: ArchiveSource + ?Sized,
{
    if !index.is_file(path) {
        return Err(Error::UnknownFile {
            path: path.to_string(),
        });
    }
    source.read_entry(index.archive_name(path.stripped()))
}

fn decode(path: &VirtualPath, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| Error::DecodeError {
        path: path.to_string(),
        source,
    })
}

/// Reads the complete text of the file at `path`.
///
/// # Errors
///
/// - [`Error::UnknownFile`] if `path` is not a file entry of the index
/// - [`Error::DecodeError`] if the content is not UTF-8
/// - any error of the source's [`read_entry`](ArchiveSource::read_entry)
pub fn read_all<S>(source: &S, index: &EntryIndex, path: &VirtualPath) -> Result<String>
where
    S: ArchiveSource + ?Sized,
{
    let bytes = fetch(source, index, path)?;
    decode(path, bytes)
}

/// Reads at most the first `lines` lines of the file at `path`.
///
/// Line terminators (`\n` or `\r\n`) are removed. Only the returned lines are
/// decoded, so a file whose tail is not text can still be inspected.
///
/// # Errors
///
/// Same as [`read_all`].
///
/// # Example
///
/// ```
/// use vshell::{EntryIndex, MemorySource, VirtualPath, ops::read_head};
///
/// let source = MemorySource::new().file("notes.txt", "one\r\ntwo\nthree\n");
/// let index = EntryIndex::build(["notes.txt"]);
/// let path = VirtualPath::new("/notes.txt").unwrap();
///
/// assert_eq!(read_head(&source, &index, &path, 2).unwrap(), vec!["one", "two"]);
/// ```
pub fn read_head<S>(
    source: &S,
    index: &EntryIndex,
    path: &VirtualPath,
    lines: usize,
) -> Result<Vec<String>>
where
    S: ArchiveSource + ?Sized,
{
    let bytes = fetch(source, index, path)?;

    let mut head = Vec::with_capacity(lines.min(DEFAULT_HEAD_LINES));
    for line in Cursor::new(bytes).split(b'\n').take(lines) {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        head.push(decode(path, line)?);
    }
    Ok(head)
}
