//! Command implementations for the CLI tool.

use std::io::{self, BufRead, Write};
use std::path::Path;

use vshell::{Dispatch, Session, SessionOptions, ZipSource};

use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::output::{OutputFormatter, create_formatter};
use crate::{ArchiveArgs, OutputFormat};

/// Interactive shell command implementation
pub fn shell(args: &ArchiveArgs, format: OutputFormat) -> ExitCode {
    let formatter = create_formatter(format);
    let mut session = match open_session(args, formatter.as_ref()) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        if formatter.shows_prompt() {
            print!("{}", session.prompt());
            if let Err(e) = io::stdout().flush() {
                eprintln!("{}", formatter.format_fatal(&e.into()));
                return ExitCode::IoError;
            }
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                // EOF ends the session like `exit`
                if formatter.shows_prompt() {
                    println!();
                }
                return ExitCode::Success;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}", formatter.format_fatal(&e.into()));
                return ExitCode::IoError;
            }
        }

        let dispatch = session.dispatch(&line);
        emit(formatter.as_ref(), line.trim(), &session, &dispatch);
        if dispatch.is_exit() {
            return ExitCode::Success;
        }
    }
}

/// Script execution command implementation
///
/// Blank lines and lines starting with `#` are skipped. Execution stops at
/// `exit`; failing commands are reported and execution continues.
pub fn run(args: &ArchiveArgs, script: &Path, format: OutputFormat) -> ExitCode {
    let formatter = create_formatter(format);

    let text = match std::fs::read_to_string(script) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", formatter.format_fatal(&e.into()));
            return ExitCode::IoError;
        }
    };

    let mut session = match open_session(args, formatter.as_ref()) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let mut failures = 0usize;
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        log::debug!("{}:{}: {}", script.display(), number + 1, line);

        let dispatch = session.dispatch(line);
        emit(formatter.as_ref(), line, &session, &dispatch);
        match dispatch {
            Dispatch::Exit => break,
            Dispatch::Failed(_) => failures += 1,
            Dispatch::Output(_) => {}
        }
    }

    if failures > 0 {
        log::info!("{} script command(s) failed", failures);
        ExitCode::Warning
    } else {
        ExitCode::Success
    }
}

/// Single command implementation
pub fn exec(args: &ArchiveArgs, words: &[String], format: OutputFormat) -> ExitCode {
    let formatter = create_formatter(format);
    let mut session = match open_session(args, formatter.as_ref()) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let line = words.join(" ");
    let dispatch = session.dispatch(&line);
    emit(formatter.as_ref(), &line, &session, &dispatch);

    match &dispatch {
        Dispatch::Failed(e) => error_to_exit_code(e),
        Dispatch::Output(_) | Dispatch::Exit => ExitCode::Success,
    }
}

fn open_session(
    args: &ArchiveArgs,
    formatter: &dyn OutputFormatter,
) -> Result<Session<ZipSource>, ExitCode> {
    let source = ZipSource::open(&args.archive).map_err(|e| {
        eprintln!("{}", formatter.format_fatal(&e));
        error_to_exit_code(&e)
    })?;

    let options = session_options(args);
    log::info!("Opened {} (label '{}')", args.archive.display(), options.label);

    Session::bootstrap(source, options).map_err(|e| {
        eprintln!("{}", formatter.format_fatal(&e));
        error_to_exit_code(&e)
    })
}

fn session_options(args: &ArchiveArgs) -> SessionOptions {
    let label = match &args.label {
        Some(label) => label.clone(),
        None => default_label(&args.archive),
    };

    SessionOptions::new()
        .head_lines(args.head_lines)
        .label(label)
        .sort_listing(!args.unsorted)
}

/// Prompt label for an archive: its path without the extension.
fn default_label(archive: &Path) -> String {
    archive.with_extension("").display().to_string()
}

fn emit(
    formatter: &dyn OutputFormatter,
    line: &str,
    session: &Session<ZipSource>,
    dispatch: &Dispatch,
) {
    let text = formatter.format_dispatch(line, session.current_dir(), dispatch);
    if !text.is_empty() {
        println!("{}", text);
    }
}
