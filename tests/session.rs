//! Session integration tests.
//!
//! These tests drive a session through raw command lines the way a front end
//! would, over an in-memory archive.

use vshell::{Dispatch, EntryIndex, Error, MemorySource, Session, SessionOptions};

mod common;

use common::standard_session;

fn output(session: &mut Session<MemorySource>, line: &str) -> Vec<String> {
    match session.dispatch(line) {
        Dispatch::Output(lines) => lines,
        other => panic!("'{}' did not produce output: {:?}", line, other),
    }
}

fn failure(session: &mut Session<MemorySource>, line: &str) -> Error {
    match session.dispatch(line) {
        Dispatch::Failed(error) => error,
        other => panic!("'{}' did not fail: {:?}", line, other),
    }
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[test]
fn test_session_starts_at_root() {
    let mut session = standard_session();
    assert_eq!(session.prompt(), "/$ ");
    assert_eq!(output(&mut session, "pwd"), vec!["/"]);
}

#[test]
fn test_cd_parent_chain() {
    let mut session = standard_session();

    output(&mut session, "cd docs/sub");
    assert_eq!(session.current_dir().as_str(), "/docs/sub");
    assert_eq!(session.prompt(), "/docs/sub$ ");

    output(&mut session, "cd ..");
    assert_eq!(session.current_dir().as_str(), "/docs");

    output(&mut session, "cd ..");
    assert_eq!(session.current_dir().as_str(), "/");

    output(&mut session, "cd ..");
    assert_eq!(session.current_dir().as_str(), "/");
}

#[test]
fn test_cd_absolute_and_dot() {
    let mut session = standard_session();
    output(&mut session, "cd /docs/sub");
    output(&mut session, "cd .");
    assert_eq!(session.current_dir().as_str(), "/docs/sub");

    output(&mut session, "cd /docs");
    assert_eq!(session.current_dir().as_str(), "/docs");
}

#[test]
fn test_cd_normalizes_segments() {
    let mut session = standard_session();
    output(&mut session, "cd docs//sub/./../sub/");
    assert_eq!(session.current_dir().as_str(), "/docs/sub");
}

#[test]
fn test_cd_without_argument_goes_to_root() {
    let mut session = standard_session();
    output(&mut session, "cd docs/sub");
    output(&mut session, "cd");
    assert!(session.current_dir().is_root());
}

#[test]
fn test_cd_nonexistent_keeps_state() {
    let mut session = standard_session();
    output(&mut session, "cd docs");

    let err = failure(&mut session, "cd nowhere");
    assert!(matches!(&err, Error::UnknownDirectory { path } if path == "/docs/nowhere"));
    assert_eq!(err.to_string(), "Error: unknown directory /docs/nowhere");
    assert_eq!(session.current_dir().as_str(), "/docs");
}

#[test]
fn test_cd_into_file_fails() {
    let mut session = standard_session();
    let err = failure(&mut session, "cd top.txt");
    assert!(matches!(err, Error::UnknownDirectory { .. }));
    assert!(session.current_dir().is_root());
}

#[test]
fn test_pwd_with_label() {
    let source = common::standard_source();
    let options = SessionOptions::new().label("test_filesystem");
    let mut session = Session::bootstrap(source, options).unwrap();

    assert_eq!(output(&mut session, "pwd"), vec!["test_filesystem/"]);
    output(&mut session, "cd docs");
    assert_eq!(output(&mut session, "pwd"), vec!["test_filesystem/docs"]);
}

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_ls_root_lists_top_level_directories() {
    let mut session = standard_session();
    assert_eq!(output(&mut session, "ls"), vec!["docs", "empty"]);
}

#[test]
fn test_ls_root_of_distilled_example() {
    let source = MemorySource::new()
        .file("docs/a.txt", "a")
        .file("docs/sub/b.txt", "b")
        .file("top.txt", "t");
    let mut session = Session::bootstrap(source, SessionOptions::default()).unwrap();
    assert_eq!(output(&mut session, "ls"), vec!["docs"]);
}

#[test]
fn test_ls_current_and_relative() {
    let mut session = standard_session();
    assert_eq!(output(&mut session, "ls docs"), vec!["a.txt", "long.txt", "sub"]);

    output(&mut session, "cd docs");
    assert_eq!(output(&mut session, "ls"), vec!["a.txt", "long.txt", "sub"]);
    assert_eq!(output(&mut session, "ls sub"), vec!["b.txt"]);
    assert_eq!(output(&mut session, "ls .."), vec!["docs", "empty"]);
}

#[test]
fn test_ls_empty_directory() {
    let mut session = standard_session();
    assert!(output(&mut session, "ls empty").is_empty());
}

#[test]
fn test_ls_unknown_directory() {
    let mut session = standard_session();
    let err = failure(&mut session, "ls nowhere");
    assert!(matches!(err, Error::UnknownDirectory { path } if path == "/nowhere"));
}

#[test]
fn test_ls_does_not_match_name_prefixes() {
    let source = MemorySource::new()
        .file("docs/a.txt", "a")
        .file("mydocs/x.txt", "x")
        .file("docs2/y.txt", "y");
    let mut session = Session::bootstrap(source, SessionOptions::default()).unwrap();
    assert_eq!(output(&mut session, "ls docs"), vec!["a.txt"]);
}

#[test]
fn test_ls_unsorted_has_same_names() {
    let options = SessionOptions::new().sort_listing(false);
    let mut session = Session::bootstrap(common::standard_source(), options).unwrap();

    let mut names = output(&mut session, "ls docs");
    names.sort();
    assert_eq!(names, vec!["a.txt", "long.txt", "sub"]);
}

#[test]
fn test_irregular_archive_names_are_navigable() {
    let source = MemorySource::new()
        .file("a//b/c.txt", "deep\n")
        .file("./docs/a.txt", "dotted\n");
    let mut session = Session::bootstrap(source, SessionOptions::default()).unwrap();

    assert_eq!(output(&mut session, "ls"), vec!["a", "docs"]);
    assert_eq!(output(&mut session, "ls /a"), vec!["b"]);
    assert_eq!(output(&mut session, "ls /a/b"), vec!["c.txt"]);
    assert_eq!(output(&mut session, "cat a//b/c.txt"), vec!["deep"]);
    assert_eq!(output(&mut session, "cat ./docs/a.txt"), vec!["dotted"]);

    output(&mut session, "cd docs");
    assert_eq!(session.current_dir().as_str(), "/docs");
    assert_eq!(output(&mut session, "head a.txt"), vec!["dotted"]);
}

// =============================================================================
// Reading Tests
// =============================================================================

#[test]
fn test_cat() {
    let mut session = standard_session();
    assert_eq!(
        output(&mut session, "cat docs/a.txt"),
        vec!["alpha 1", "alpha 2", "alpha 3"]
    );

    output(&mut session, "cd docs/sub");
    assert_eq!(output(&mut session, "cat b.txt"), vec!["beta"]);
    assert_eq!(output(&mut session, "cat /top.txt"), vec!["top level"]);
}

#[test]
fn test_cat_errors() {
    let mut session = standard_session();
    assert!(matches!(
        failure(&mut session, "cat"),
        Error::MissingArgument { command: "cat" }
    ));
    assert!(matches!(
        failure(&mut session, "cat docs/missing.txt"),
        Error::UnknownFile { .. }
    ));
    assert!(matches!(failure(&mut session, "cat docs"), Error::UnknownFile { .. }));
}

#[test]
fn test_head_short_and_long_files() {
    let mut session = standard_session();
    assert_eq!(output(&mut session, "head docs/a.txt").len(), 3);

    let lines = output(&mut session, "head docs/long.txt");
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "line 1");
    assert_eq!(lines[9], "line 10");
}

#[test]
fn test_head_line_count() {
    let mut session = standard_session();
    assert_eq!(
        output(&mut session, "head -n 2 docs/long.txt"),
        vec!["line 1", "line 2"]
    );

    let options = SessionOptions::new().head_lines(4);
    let mut session = Session::bootstrap(common::standard_source(), options).unwrap();
    assert_eq!(output(&mut session, "head docs/long.txt").len(), 4);
    assert_eq!(output(&mut session, "head -n 12 docs/long.txt").len(), 12);
}

#[test]
fn test_head_errors() {
    let mut session = standard_session();
    assert!(matches!(
        failure(&mut session, "head"),
        Error::MissingArgument { command: "head" }
    ));
    assert!(matches!(
        failure(&mut session, "head -n x docs/a.txt"),
        Error::InvalidArgument { command: "head", .. }
    ));
    assert!(matches!(
        failure(&mut session, "head nothing.txt"),
        Error::UnknownFile { .. }
    ));
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_rmdir_non_empty() {
    let mut session = standard_session();
    let before = session.index().len();

    let err = failure(&mut session, "rmdir docs");
    assert!(matches!(&err, Error::NotEmpty { marker } if marker == "docs/"));
    assert_eq!(err.to_string(), "Error: Directory docs/ is not empty");
    assert_eq!(session.index().len(), before);
}

#[test]
fn test_rmdir_empty_then_repeat() {
    let mut session = standard_session();
    let before = session.index().len();

    assert_eq!(
        output(&mut session, "rmdir empty"),
        vec!["Directory empty/ removed"]
    );
    assert_eq!(session.index().len(), before - 1);
    assert_eq!(output(&mut session, "ls"), vec!["docs"]);

    let err = failure(&mut session, "rmdir empty");
    assert!(matches!(err, Error::UnknownDirectory { .. }));
    assert_eq!(session.index().len(), before - 1);
}

#[test]
fn test_rmdir_current_directory_refused() {
    let mut session = standard_session();
    output(&mut session, "cd empty");

    let err = failure(&mut session, "rmdir .");
    assert!(matches!(err, Error::Busy { .. }));
    assert!(session.index().contains("empty/"));

    output(&mut session, "cd ..");
    output(&mut session, "rmdir empty");
    assert!(!session.index().contains("empty/"));
}

#[test]
fn test_rmdir_synthesized_directory() {
    let mut session = Session::bootstrap(
        MemorySource::new().directory("a/b/c"),
        SessionOptions::default(),
    )
    .unwrap();

    assert!(failure(&mut session, "rmdir a/b").to_string().contains("not empty"));
    output(&mut session, "rmdir a/b/c");
    output(&mut session, "rmdir a/b");
    output(&mut session, "rmdir a");
    assert!(session.index().is_empty());
}

#[test]
fn test_rmdir_root_refused() {
    let mut session = standard_session();
    assert!(matches!(failure(&mut session, "rmdir /"), Error::UnknownDirectory { .. }));
}

#[test]
fn test_rmdir_does_not_touch_source() {
    let mut session = standard_session();
    output(&mut session, "rmdir empty");
    assert_eq!(session.source().len(), common::standard_source().len());
}

// =============================================================================
// Dispatcher Tests
// =============================================================================

#[test]
fn test_unknown_and_missing_command() {
    let mut session = standard_session();
    assert_eq!(
        session.dispatch("format c:").render(),
        vec!["format c:: unknown command"]
    );
    assert!(matches!(failure(&mut session, "   "), Error::MissingCommand));
}

#[test]
fn test_exit() {
    let mut session = standard_session();
    assert!(session.dispatch("exit").is_exit());
    assert!(session.dispatch("exit").render().is_empty());
    assert!(matches!(
        failure(&mut session, "exit now"),
        Error::UnexpectedArgument { command: "exit", .. }
    ));
}

#[test]
fn test_errors_leave_session_usable() {
    let mut session = standard_session();
    for line in ["", "bogus", "cd /nope", "cat", "rmdir docs", "head -n"] {
        assert!(session.dispatch(line).is_failure(), "'{}' should fail", line);
    }
    assert!(session.current_dir().is_root());
    assert_eq!(output(&mut session, "ls"), vec!["docs", "empty"]);
}

#[test]
fn test_sessions_over_shared_snapshot() {
    let source = common::standard_source();
    let index = EntryIndex::build(vshell::ArchiveSource::list_entries(&source).unwrap());

    let mut first = Session::with_index(&source, index.clone(), SessionOptions::default());
    let mut second = Session::with_index(&source, index, SessionOptions::default());

    assert!(!first.dispatch("rmdir empty").is_failure());
    assert!(second.index().contains("empty/"));
    assert_eq!(second.dispatch("cat top.txt").render(), vec!["top level"]);
    assert!(!first.index().contains("empty/"));
}
