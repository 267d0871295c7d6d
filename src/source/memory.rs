//! In-memory archive source.

use super::ArchiveSource;
use crate::{Error, Result};

/// An archive whose entries live in memory.
///
/// Entries keep their insertion order, like a ZIP central directory.
///
/// # Example
///
/// ```
/// use vshell::{ArchiveSource, MemorySource};
///
/// let source = MemorySource::new()
///     .directory("empty")
///     .file("docs/readme.txt", "hello\n");
///
/// assert_eq!(source.list_entries().unwrap(), vec!["empty/", "docs/readme.txt"]);
/// assert_eq!(source.read_entry("docs/readme.txt").unwrap(), b"hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<(String, Vec<u8>)>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file entry.
    pub fn file(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert_file(name, contents);
        self
    }

    /// Adds a directory marker. A trailing `/` is appended if missing.
    pub fn directory(mut self, name: impl Into<String>) -> Self {
        self.insert_directory(name);
        self
    }

    /// Adds or replaces a file entry in place.
    pub fn insert_file(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        let name = name.into();
        let contents = contents.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = contents,
            None => self.entries.push((name, contents)),
        }
    }

    /// Adds a directory marker in place.
    pub fn insert_directory(&mut self, name: impl Into<String>) {
        let mut name = name.into();
        if !name.ends_with('/') {
            name.push('/');
        }
        if !self.entries.iter().any(|(existing, _)| *existing == name) {
            self.entries.push((name, Vec::new()));
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the source has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ArchiveSource for MemorySource {
    fn list_entries(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read_entry(&self, name: &str) -> Result<Vec<u8>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, contents)| contents.clone())
            .ok_or_else(|| Error::EntryNotFound {
                path: name.to_string(),
            })
    }
}
