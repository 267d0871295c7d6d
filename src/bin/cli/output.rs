//! Output formatting for CLI operations.

use console::style;
use serde_json::json;
use vshell::{Dispatch, Error, VirtualPath};

/// Trait for output formatting
pub trait OutputFormatter {
    /// Formats the outcome of one command line. An empty string prints nothing.
    fn format_dispatch(&self, line: &str, cwd: &VirtualPath, dispatch: &Dispatch) -> String;

    /// Formats an error that ends the program
    fn format_fatal(&self, error: &Error) -> String;

    /// Whether the interactive prompt should be shown
    fn shows_prompt(&self) -> bool;
}

/// Human-readable output formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_dispatch(&self, _line: &str, _cwd: &VirtualPath, dispatch: &Dispatch) -> String {
        match dispatch {
            Dispatch::Output(lines) => lines.join("\n"),
            Dispatch::Failed(error) => style(error.to_string()).red().to_string(),
            Dispatch::Exit => String::new(),
        }
    }

    fn format_fatal(&self, error: &Error) -> String {
        format!("{} {}", style("Error:").red().bold(), error)
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}

/// JSON output formatter, one object per command line
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_dispatch(&self, line: &str, cwd: &VirtualPath, dispatch: &Dispatch) -> String {
        let obj = match dispatch {
            Dispatch::Output(lines) => json!({
                "command": line,
                "cwd": cwd.as_str(),
                "status": "ok",
                "output": lines,
            }),
            Dispatch::Failed(error) => json!({
                "command": line,
                "cwd": cwd.as_str(),
                "status": "error",
                "error": error.to_string(),
            }),
            Dispatch::Exit => json!({
                "command": line,
                "cwd": cwd.as_str(),
                "status": "exit",
            }),
        };

        serde_json::to_string(&obj).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_fatal(&self, error: &Error) -> String {
        let obj = json!({
            "status": "fatal",
            "error": error.to_string(),
        });

        serde_json::to_string(&obj).unwrap_or_else(|_| "{}".to_string())
    }

    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Creates the appropriate formatter based on output format
pub fn create_formatter(format: super::OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        super::OutputFormat::Human => Box::new(HumanFormatter),
        super::OutputFormat::Json => Box::new(JsonFormatter),
    }
}
