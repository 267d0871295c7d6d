//! Fuzz target for EntryIndex::build with arbitrary entry names.
//!
//! Names are taken from newline-separated input. After building, every
//! synthesized directory must be listable and every name's prefixes present.
//!
//! Run with: cargo +nightly fuzz run entry_index
//!
//! Key properties being tested:
//! - Every input name is stored in its normalized form
//! - Every `/`-terminated prefix of a stored name is a directory marker
//! - Every directory marker can be listed

#![no_main]

use libfuzzer_sys::fuzz_target;
use vshell::ops::list_directory;
use vshell::{EntryIndex, VirtualPath};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let index = EntryIndex::build(text.split('\n'));

    for raw in text.split('\n') {
        let Some(name) = EntryIndex::normalize_name(raw) else {
            continue;
        };
        assert!(index.contains(&name), "Name {:?} not indexed as {:?}", raw, name);

        for (idx, _) in name.match_indices('/') {
            let prefix = &name[..=idx];
            assert!(
                index.contains(prefix),
                "Missing marker {:?} for name {:?}",
                prefix,
                raw
            );
        }
    }

    for entry in &index {
        let Some(dir) = entry.strip_suffix('/') else {
            continue;
        };
        // NUL bytes and oversized names cannot be typed as paths
        if let Ok(path) = VirtualPath::new(&format!("/{}", dir)) {
            assert!(
                list_directory(&index, &path).is_ok(),
                "Marker {:?} is not listable",
                entry
            );
        }
    }

    assert!(list_directory(&index, &VirtualPath::root()).is_ok());
});
