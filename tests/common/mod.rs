//! Shared test utilities for integration tests.
//!
//! This module provides common helper functions used across multiple test files.
//! Fixture creation helpers are consolidated here to avoid duplication.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use vshell::{MemorySource, Session, SessionOptions};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// The tree most tests navigate.
///
/// ```text
/// /
/// ├── docs/
/// │   ├── a.txt        (3 lines)
/// │   ├── long.txt     (15 lines)
/// │   └── sub/
/// │       └── b.txt
/// ├── empty/
/// └── top.txt
/// ```
pub const TREE: &[(&str, &[u8])] = &[
    ("docs/a.txt", b"alpha 1\nalpha 2\nalpha 3\n"),
    ("docs/sub/b.txt", b"beta\n"),
    ("empty/", b""),
    ("top.txt", b"top level\n"),
];

/// Returns `count` numbered lines, `line 1` to `line <count>`.
pub fn numbered_lines(count: usize) -> String {
    (1..=count).map(|n| format!("line {}\n", n)).collect()
}

/// Builds a [`MemorySource`] from `(name, data)` pairs. Names ending in `/`
/// become directory entries.
pub fn memory_source(entries: &[(&str, &[u8])]) -> MemorySource {
    let mut source = MemorySource::new();
    for (name, data) in entries {
        match name.strip_suffix('/') {
            Some(dir) => source.insert_directory(dir),
            None => source.insert_file(*name, *data),
        }
    }
    source
}

/// The standard tree with the 15-line `docs/long.txt` added.
pub fn standard_source() -> MemorySource {
    let mut source = memory_source(TREE);
    source.insert_file("docs/long.txt", numbered_lines(15));
    source
}

/// A session over [`standard_source`] with default options.
pub fn standard_session() -> Session<MemorySource> {
    Session::bootstrap(standard_source(), SessionOptions::default())
        .expect("Failed to start session")
}

/// Writes a ZIP file with the given entries into a fresh temp dir.
///
/// Names ending in `/` are written as directory entries. The returned
/// [`TempDir`] must be kept alive for as long as the archive is used.
pub fn create_zip_file(file_name: &str, entries: &[(&str, &[u8])]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(file_name);

    let file = File::create(&path).expect("Failed to create archive file");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, data) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(*name, options)
                .expect("Failed to add directory");
        } else {
            writer.start_file(*name, options).expect("Failed to start file");
            writer.write_all(data).expect("Failed to write file data");
        }
    }
    writer.finish().expect("Failed to finish archive");

    (temp_dir, path)
}

/// Writes the standard tree (including `docs/long.txt`) as a ZIP file.
pub fn create_standard_zip() -> (TempDir, PathBuf) {
    let long = numbered_lines(15);
    let mut entries: Vec<(&str, &[u8])> = TREE.to_vec();
    entries.push(("docs/long.txt", long.as_bytes()));
    create_zip_file("test_filesystem.zip", &entries)
}
