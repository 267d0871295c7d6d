//! ZIP archive source backed by the `zip` crate.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

use super::ArchiveSource;
use crate::{Error, Result};

/// A ZIP file on disk.
///
/// The file is opened anew for every call and closed before the call
/// returns, so a long session never keeps a handle on the archive.
///
/// # Example
///
/// ```rust,no_run
/// use vshell::{Session, SessionOptions, ZipSource};
///
/// let source = ZipSource::open("test_filesystem.zip")?;
/// let mut session = Session::bootstrap(source, SessionOptions::default())?;
/// # Ok::<(), vshell::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ZipSource {
    path: PathBuf,
}

impl ZipSource {
    /// Creates a source for `path` without touching the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a source for `path`, checking that it opens as a ZIP archive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened and [`Error::Zip`]
    /// if it is not a readable ZIP archive.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let source = Self::new(path);
        source.archive()?;
        Ok(source)
    }

    /// Path of the backing ZIP file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn archive(&self) -> Result<ZipArchive<BufReader<File>>> {
        let file = File::open(&self.path)?;
        Ok(ZipArchive::new(BufReader::new(file))?)
    }
}

impl ArchiveSource for ZipSource {
    fn list_entries(&self) -> Result<Vec<String>> {
        let archive = self.archive()?;
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        log::debug!(
            "Listed {} entries from '{}'",
            names.len(),
            self.path.display()
        );
        Ok(names)
    }

    fn read_entry(&self, name: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive()?;
        let mut entry = match archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(Error::EntryNotFound {
                    path: name.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut contents = Vec::new();
        entry.read_to_end(&mut contents)?;
        log::trace!("Read {} bytes from entry '{}'", contents.len(), name);
        Ok(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn write_zip(dir: &TempDir, entries: &[(&str, &[u8])]) -> PathBuf {
        let path = dir.path().join("fixture.zip");
        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        for (name, data) in entries {
            if name.ends_with('/') {
                writer
                    .add_directory(*name, SimpleFileOptions::default())
                    .unwrap();
            } else {
                writer.start_file(*name, SimpleFileOptions::default()).unwrap();
                writer.write_all(data).unwrap();
            }
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn test_list_entries() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(&dir, &[("folder/", b""), ("folder/text.txt", b"hi")]);

        let source = ZipSource::open(&path).unwrap();
        let names = source.list_entries().unwrap();
        assert!(names.contains(&"folder/".to_string()));
        assert!(names.contains(&"folder/text.txt".to_string()));
    }

    #[test]
    fn test_read_entry() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(&dir, &[("a.txt", b"line one\nline two\n")]);

        let source = ZipSource::new(&path);
        assert_eq!(source.read_entry("a.txt").unwrap(), b"line one\nline two\n");
    }

    #[test]
    fn test_read_missing_entry() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(&dir, &[("a.txt", b"x")]);

        let err = ZipSource::new(&path).read_entry("b.txt").unwrap_err();
        assert!(matches!(err, Error::EntryNotFound { path } if path == "b.txt"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ZipSource::open(dir.path().join("absent.zip")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_session_fatal());
    }

    #[test]
    fn test_open_not_a_zip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.zip");
        std::fs::write(&path, b"this is not an archive").unwrap();

        let err = ZipSource::open(&path).unwrap_err();
        assert!(matches!(err, Error::Zip(_)));
    }
}
