//! Fuzz target for Session::dispatch with arbitrary command lines.
//!
//! Every input line is dispatched against a small fixed tree. Dispatch must
//! never panic, and the current directory must always remain a directory.
//!
//! Run with: cargo +nightly fuzz run command_dispatch

#![no_main]

use libfuzzer_sys::fuzz_target;
use vshell::{MemorySource, Session, SessionOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let source = MemorySource::new()
        .file("docs/a.txt", "alpha\nbeta\n")
        .file("docs/sub/b.txt", "gamma\n")
        .file("top.txt", "top\n")
        .directory("empty");
    let Ok(mut session) = Session::bootstrap(source, SessionOptions::default()) else {
        return;
    };

    for line in text.lines() {
        if session.dispatch(line).is_exit() {
            break;
        }
        assert!(session.index().is_dir(session.current_dir()));
    }
});
