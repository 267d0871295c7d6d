//! Command line parsing.
//!
//! A command line is a verb followed by whitespace-separated arguments. Paths
//! are kept as raw tokens here; the session resolves them against its current
//! directory.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `cd [path]` - change directory; no path means the root.
    Cd {
        /// Raw target token.
        path: Option<String>,
    },
    /// `pwd` - print the working directory.
    Pwd,
    /// `ls [path]` - list a directory; no path means the current one.
    Ls {
        /// Raw target token.
        path: Option<String>,
    },
    /// `cat <path>` - print a file.
    Cat {
        /// Raw target token.
        path: Option<String>,
    },
    /// `head [-n N] <path>` - print the first lines of a file.
    Head {
        /// Raw target token.
        path: Option<String>,
        /// Line count from `-n`, if given.
        lines: Option<usize>,
    },
    /// `rmdir <path>` - remove an empty directory.
    Rmdir {
        /// Raw target token.
        path: Option<String>,
    },
    /// `exit` - end the session.
    Exit,
}

impl Command {
    /// Parses one command line.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCommand`] for a blank line
    /// - [`Error::UnknownCommand`] for an unsupported verb
    /// - [`Error::UnexpectedArgument`] for surplus arguments
    /// - [`Error::InvalidArgument`] / [`Error::MissingArgument`] for a bad `-n`
    ///
    /// # Example
    ///
    /// ```
    /// use vshell::Command;
    ///
    /// let command = Command::parse("  head -n 3 docs/a.txt ").unwrap();
    /// assert_eq!(
    ///     command,
    ///     Command::Head { path: Some("docs/a.txt".into()), lines: Some(3) }
    /// );
    /// assert!(Command::parse("").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(Error::MissingCommand)?;

        let command = match verb {
            "cd" => Command::Cd {
                path: optional_path("cd", &mut tokens)?,
            },
            "pwd" => {
                no_arguments("pwd", &mut tokens)?;
                Command::Pwd
            }
            "ls" => Command::Ls {
                path: optional_path("ls", &mut tokens)?,
            },
            "cat" => Command::Cat {
                path: optional_path("cat", &mut tokens)?,
            },
            "head" => parse_head(&mut tokens)?,
            "rmdir" => Command::Rmdir {
                path: optional_path("rmdir", &mut tokens)?,
            },
            "exit" => {
                no_arguments("exit", &mut tokens)?;
                Command::Exit
            }
            _ => {
                return Err(Error::UnknownCommand {
                    command: line.to_string(),
                });
            }
        };

        Ok(command)
    }

    /// The verb of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Cd { .. } => "cd",
            Command::Pwd => "pwd",
            Command::Ls { .. } => "ls",
            Command::Cat { .. } => "cat",
            Command::Head { .. } => "head",
            Command::Rmdir { .. } => "rmdir",
            Command::Exit => "exit",
        }
    }
}

fn no_arguments<'a>(
    command: &'static str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<()> {
    match tokens.next() {
        Some(extra) => Err(Error::UnexpectedArgument {
            command,
            argument: extra.to_string(),
        }),
        None => Ok(()),
    }
}

fn optional_path<'a>(
    command: &'static str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<Option<String>> {
    let path = tokens.next().map(str::to_string);
    no_arguments(command, tokens)?;
    Ok(path)
}

fn parse_head<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Command> {
    let mut lines = None;
    let mut path = None;

    while let Some(token) = tokens.next() {
        if token == "-n" && lines.is_none() {
            let value = tokens
                .next()
                .ok_or(Error::MissingArgument { command: "head" })?;
            let count = value.parse::<usize>().map_err(|_| Error::InvalidArgument {
                command: "head",
                argument: value.to_string(),
            })?;
            lines = Some(count);
        } else if path.is_none() {
            path = Some(token.to_string());
        } else {
            return Err(Error::UnexpectedArgument {
                command: "head",
                argument: token.to_string(),
            });
        }
    }

    Ok(Command::Head { path, lines })
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            Command::Head { path, lines } => {
                if let Some(lines) = lines {
                    write!(f, " -n {}", lines)?;
                }
                if let Some(path) = path {
                    write!(f, " {}", path)?;
                }
            }
            Command::Cd { path }
            | Command::Ls { path }
            | Command::Cat { path }
            | Command::Rmdir { path } => {
                if let Some(path) = path {
                    write!(f, " {}", path)?;
                }
            }
            Command::Pwd | Command::Exit => {}
        }
        Ok(())
    }
}
