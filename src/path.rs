//! Canonical virtual path type.
//!
//! All path arithmetic of the shell (joining, taking the parent, counting
//! depth, converting to index keys) goes through [`VirtualPath`], so no other
//! module slices path strings by hand.

use crate::{Error, Result};
use std::fmt;

/// Maximum length for virtual paths (in bytes).
const MAX_PATH_LENGTH: usize = 32768;

/// A canonical absolute path inside the virtual filesystem.
///
/// A `VirtualPath` always starts with `/`, never ends with `/` unless it is the
/// root, and never contains empty, `.` or `..` segments.
///
/// # Examples
///
/// ```
/// use vshell::VirtualPath;
///
/// let path = VirtualPath::new("/docs//sub/./notes.txt").unwrap();
/// assert_eq!(path.as_str(), "/docs/sub/notes.txt");
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.parent().as_str(), "/docs/sub");
///
/// // Relative paths are rejected
/// assert!(VirtualPath::new("docs").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualPath(String);

impl VirtualPath {
    /// Returns the root path `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Creates a canonical path from an absolute path string.
    ///
    /// Empty and `.` segments are dropped and `..` segments remove the
    /// preceding component; `..` at the root stays at the root.
    ///
    /// # Errors
    ///
    /// Returns an error if the path:
    /// - Does not start with `/`
    /// - Contains NUL bytes
    /// - Exceeds the maximum path length
    pub fn new(s: &str) -> Result<Self> {
        if !s.starts_with('/') {
            return Err(Error::InvalidPath(format!(
                "'{}' is not an absolute path",
                s
            )));
        }
        Self::root().join(s)
    }

    fn validate(s: &str) -> Result<()> {
        if s.contains('\0') {
            return Err(Error::InvalidPath("contains NUL byte".into()));
        }

        if s.len() > MAX_PATH_LENGTH {
            return Err(Error::InvalidPath(format!(
                "path exceeds maximum length of {} bytes",
                MAX_PATH_LENGTH
            )));
        }

        Ok(())
    }

    fn from_components(components: &[&str]) -> Self {
        Self(format!("/{}", components.join("/")))
    }

    /// Returns the path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Returns an iterator over the path components.
    ///
    /// The root has no components.
    ///
    /// ```
    /// use vshell::VirtualPath;
    ///
    /// let path = VirtualPath::new("/a/b/c.txt").unwrap();
    /// let components: Vec<_> = path.components().collect();
    /// assert_eq!(components, vec!["a", "b", "c.txt"]);
    /// assert_eq!(VirtualPath::root().components().count(), 0);
    /// ```
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.stripped().split('/').filter(|segment| !segment.is_empty())
    }

    /// Number of components below the root.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// Returns the parent directory. The parent of the root is the root.
    pub fn parent(&self) -> Self {
        match self.0.rfind('/') {
            Some(0) | None => Self::root(),
            Some(idx) => Self(self.0[..idx].to_string()),
        }
    }

    /// Resolves `relative` against this path, segment by segment.
    ///
    /// A leading `/` in `relative` is ignored; callers decide whether a token
    /// is absolute before joining.
    ///
    /// # Errors
    ///
    /// Returns an error if the result would not be a valid path.
    pub fn join(&self, relative: &str) -> Result<Self> {
        Self::validate(relative)?;

        let mut components: Vec<&str> = self.components().collect();
        for segment in relative.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    components.pop();
                }
                name => components.push(name),
            }
        }

        let joined = Self::from_components(&components);
        Self::validate(joined.as_str())?;
        Ok(joined)
    }

    /// Returns the last component, or `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.components().last()
    }

    /// Returns the path without its leading `/`, as stored in the entry index.
    ///
    /// The root yields the empty string.
    pub fn stripped(&self) -> &str {
        &self.0[1..]
    }

    /// Returns the directory marker for this path (`a/b/`), or `""` for the root.
    pub fn dir_marker(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            format!("{}/", self.stripped())
        }
    }

    /// Returns true if `prefix` is this path or one of its ancestors.
    ///
    /// This is a component-wise comparison: `/docs` does not start with `/do`.
    pub fn starts_with(&self, prefix: &VirtualPath) -> bool {
        let mut own = self.components();
        prefix.components().all(|segment| own.next() == Some(segment))
    }
}

impl Default for VirtualPath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for VirtualPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for VirtualPath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for VirtualPath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}
