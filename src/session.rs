//! The command dispatcher and its per-session state.

use crate::ops::{list_directory, read_all, read_head, remove_directory};
use crate::resolve::{resolve, resolve_cd};
use crate::{ArchiveSource, Command, EntryIndex, Error, Result, SessionOptions, VirtualPath};

/// Result of successfully executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output lines to show (possibly none).
    Lines(Vec<String>),
    /// The session should end.
    Exit,
}

/// Result of dispatching a raw command line.
///
/// Every error is captured here, so a front end only renders lines.
#[derive(Debug)]
pub enum Dispatch {
    /// The command succeeded with these output lines.
    Output(Vec<String>),
    /// The command failed; the session state is unchanged.
    Failed(Error),
    /// The session should end.
    Exit,
}

impl Dispatch {
    /// Returns `true` for the terminal transition.
    pub fn is_exit(&self) -> bool {
        matches!(self, Dispatch::Exit)
    }

    /// Returns `true` if the command failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Dispatch::Failed(_))
    }

    /// The lines a front end should display, error messages included.
    pub fn render(&self) -> Vec<String> {
        match self {
            Dispatch::Output(lines) => lines.clone(),
            Dispatch::Failed(error) => vec![error.to_string()],
            Dispatch::Exit => Vec::new(),
        }
    }
}

/// One shell session over an archive.
///
/// The session owns the entry index and the current directory. The archive
/// itself is only reached through the [`ArchiveSource`], once at bootstrap and
/// once per `cat`/`head`.
///
/// # Example
///
/// ```
/// use vshell::{MemorySource, Session, SessionOptions};
///
/// let source = MemorySource::new()
///     .file("docs/a.txt", "alpha\n")
///     .file("docs/sub/b.txt", "beta\n");
/// let mut session = Session::bootstrap(source, SessionOptions::new().label("fs")).unwrap();
///
/// session.dispatch("cd docs/sub");
/// assert_eq!(session.current_dir().as_str(), "/docs/sub");
/// assert_eq!(session.dispatch("pwd").render(), vec!["fs/docs/sub"]);
/// assert_eq!(session.dispatch("cat b.txt").render(), vec!["beta"]);
/// assert_eq!(session.dispatch("ls ..").render(), vec!["a.txt", "sub"]);
/// assert!(session.dispatch("exit").is_exit());
/// ```
#[derive(Debug)]
pub struct Session<S> {
    source: S,
    index: EntryIndex,
    cwd: VirtualPath,
    options: SessionOptions,
}

impl<S: ArchiveSource> Session<S> {
    /// Lists the archive once, builds the index and starts at the root.
    ///
    /// # Errors
    ///
    /// Propagates the source's listing error. Without an index no command can
    /// run, so callers should treat this as fatal.
    pub fn bootstrap(source: S, options: SessionOptions) -> Result<Self> {
        let names = source.list_entries()?;
        let index = EntryIndex::build(&names);
        log::debug!(
            "Session started with {} listed names, {} index entries",
            names.len(),
            index.len()
        );
        Ok(Self::with_index(source, index, options))
    }

    /// Starts a session over an existing index snapshot.
    pub fn with_index(source: S, index: EntryIndex, options: SessionOptions) -> Self {
        Self {
            source,
            index,
            cwd: VirtualPath::root(),
            options,
        }
    }

    /// Starts an independent session over this session's current index.
    ///
    /// The new session begins at the root; later removals in either session
    /// do not affect the other.
    pub fn fork(&self) -> Self
    where
        S: Clone,
    {
        Self::with_index(
            self.source.clone(),
            self.index.clone(),
            self.options.clone(),
        )
    }

    /// Parses and executes one raw command line.
    ///
    /// Never fails: errors are returned as [`Dispatch::Failed`] and leave the
    /// session state untouched.
    pub fn dispatch(&mut self, line: &str) -> Dispatch {
        let result = Command::parse(line).and_then(|command| self.execute(&command));
        match result {
            Ok(Outcome::Lines(lines)) => Dispatch::Output(lines),
            Ok(Outcome::Exit) => Dispatch::Exit,
            Err(error) => {
                log::debug!("Command '{}' failed: {}", line.trim(), error);
                Dispatch::Failed(error)
            }
        }
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns the command's error; the session state is unchanged on error.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome> {
        let lines = match command {
            Command::Cd { path } => {
                self.change_dir(path.as_deref())?;
                Vec::new()
            }
            Command::Pwd => vec![format!("{}{}", self.options.label, self.cwd)],
            Command::Ls { path } => self.list(path.as_deref())?,
            Command::Cat { path } => {
                let target = resolve(&self.cwd, path.as_deref(), "cat")?;
                let text = read_all(&self.source, &self.index, &target)?;
                text.lines().map(str::to_string).collect()
            }
            Command::Head { path, lines } => {
                let target = resolve(&self.cwd, path.as_deref(), "head")?;
                let count = lines.unwrap_or(self.options.head_lines);
                read_head(&self.source, &self.index, &target, count)?
            }
            Command::Rmdir { path } => {
                let target = resolve(&self.cwd, path.as_deref(), "rmdir")?;
                let marker = remove_directory(&mut self.index, &target, &self.cwd)?;
                vec![format!("Directory {} removed", marker)]
            }
            Command::Exit => return Ok(Outcome::Exit),
        };
        Ok(Outcome::Lines(lines))
    }

    fn change_dir(&mut self, token: Option<&str>) -> Result<()> {
        let target = resolve_cd(&self.cwd, token)?;
        if !self.index.is_dir(&target) {
            return Err(Error::UnknownDirectory {
                path: target.to_string(),
            });
        }
        log::debug!("cd {} -> {}", self.cwd, target);
        self.cwd = target;
        Ok(())
    }

    fn list(&self, token: Option<&str>) -> Result<Vec<String>> {
        let dir = match token {
            Some(token) => resolve(&self.cwd, Some(token), "ls")?,
            None => self.cwd.clone(),
        };
        let mut names: Vec<String> = list_directory(&self.index, &dir)?
            .into_iter()
            .map(str::to_string)
            .collect();
        if self.options.sort_listing {
            names.sort();
        }
        Ok(names)
    }
}

impl<S> Session<S> {
    /// The current directory.
    pub fn current_dir(&self) -> &VirtualPath {
        &self.cwd
    }

    /// The interactive prompt for the current directory, e.g. `/docs$ `.
    pub fn prompt(&self) -> String {
        format!("{}$ ", self.cwd)
    }

    /// The entry index as modified by this session.
    pub fn index(&self) -> &EntryIndex {
        &self.index
    }

    /// The session options.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The archive source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
