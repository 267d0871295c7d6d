//! The entry index: flat archive names plus synthesized directory markers.

use std::collections::{BTreeMap, BTreeSet};
use std::collections::btree_set;
use std::ops::Bound;

use crate::VirtualPath;

/// The set of entry names a session navigates.
///
/// Names are stored the way archives list them: files without a trailing
/// slash (`docs/a.txt`), directory markers with one (`docs/`). The root is
/// implicit and never stored.
///
/// Building the index walks every path prefix of every name, so for a file
/// `a/b/c.txt` the markers `a/` and `a/b/` are always present even when the
/// archive only lists the file.
///
/// Raw names are normalized first (see [`EntryIndex::normalize_name`]); the
/// original spelling is remembered so reads still reach the archive entry.
///
/// # Example
///
/// ```
/// use vshell::EntryIndex;
///
/// let index = EntryIndex::build(["a/b/c.txt", "./x//y.txt"]);
/// assert!(index.contains("a/"));
/// assert!(index.contains("a/b/"));
/// assert!(index.contains("a/b/c.txt"));
/// assert!(index.contains("x/y.txt"));
/// assert_eq!(index.archive_name("x/y.txt"), "./x//y.txt");
/// assert_eq!(index.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryIndex {
    entries: BTreeSet<String>,
    /// Raw archive names of entries whose stored form differs.
    aliases: BTreeMap<String, String>,
}

impl EntryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from raw archive names, synthesizing a directory marker
    /// for every path prefix.
    ///
    /// Never fails. Names that normalize to nothing (an empty name, `/`, `./`) are
    /// skipped. When two raw names normalize to the same entry, the first one
    /// listed is the one read.
    pub fn build<I, S>(raw_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = BTreeSet::new();
        let mut aliases = BTreeMap::new();
        let mut listed = 0usize;

        for raw in raw_names {
            let raw = raw.as_ref();
            let Some(name) = Self::normalize_name(raw) else {
                log::warn!("Skipping archive entry with an empty name: '{}'", raw);
                continue;
            };
            listed += 1;

            if name != raw {
                log::warn!("Archive entry '{}' is indexed as '{}'", raw, name);
                if !entries.contains(&name) {
                    aliases.insert(name.clone(), raw.to_string());
                }
            }

            for (idx, _) in name.match_indices('/') {
                let prefix = &name[..=idx];
                if !entries.contains(prefix) {
                    entries.insert(prefix.to_string());
                }
            }
            entries.insert(name);
        }

        log::debug!(
            "Indexed {} archive entries ({} after directory synthesis)",
            listed,
            entries.len()
        );

        Self { entries, aliases }
    }

    /// Normalizes a raw archive name into its stored form.
    ///
    /// Empty and `.` segments are dropped and `..` removes the preceding
    /// segment, the same way [`VirtualPath`] folds typed paths. Directory
    /// names keep a single trailing `/`. Returns `None` if nothing remains.
    ///
    /// ```
    /// use vshell::EntryIndex;
    ///
    /// assert_eq!(EntryIndex::normalize_name("a//b/./c.txt").as_deref(), Some("a/b/c.txt"));
    /// assert_eq!(EntryIndex::normalize_name("./docs/").as_deref(), Some("docs/"));
    /// assert_eq!(EntryIndex::normalize_name("/"), None);
    /// ```
    pub fn normalize_name(raw: &str) -> Option<String> {
        let mut segments: Vec<&str> = Vec::new();
        let mut is_dir = false;

        for segment in raw.split('/') {
            is_dir = matches!(segment, "" | "." | "..");
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name),
            }
        }

        if segments.is_empty() {
            return None;
        }
        let mut name = segments.join("/");
        if is_dir {
            name.push('/');
        }
        Some(name)
    }

    /// Returns the name to request from the archive for a stored entry.
    pub fn archive_name<'a>(&'a self, entry: &'a str) -> &'a str {
        self.aliases.get(entry).map_or(entry, String::as_str)
    }

    /// Exact membership test.
    ///
    /// Directory markers must be passed in their trailing-slash form.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains(path)
    }

    /// Removes one directory marker. Returns `false` if it was not present.
    ///
    /// Callers check existence and emptiness beforehand; this method does not.
    pub fn remove(&mut self, marker: &str) -> bool {
        self.aliases.remove(marker);
        self.entries.remove(marker)
    }

    /// Number of stored entries, markers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in lexicographic order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.entries.iter()
    }

    /// Returns `true` if `path` names a directory. The root always exists.
    pub fn is_dir(&self, path: &VirtualPath) -> bool {
        path.is_root() || self.contains(&path.dir_marker())
    }

    /// Returns `true` if `path` names a file entry.
    pub fn is_file(&self, path: &VirtualPath) -> bool {
        !path.is_root() && self.contains(path.stripped())
    }

    /// Iterates over every entry whose name starts with `marker`, the marker
    /// itself included.
    pub fn entries_under<'a>(&'a self, marker: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .range::<str, _>((Bound::Included(marker), Bound::Unbounded))
            .take_while(move |entry| entry.starts_with(marker))
            .map(String::as_str)
    }

    /// Returns `true` if any entry other than `marker` starts with `marker`.
    pub fn has_children(&self, marker: &str) -> bool {
        self.entries_under(marker).any(|entry| entry != marker)
    }
}

impl<S: AsRef<str>> FromIterator<S> for EntryIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<'a> IntoIterator for &'a EntryIndex {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
