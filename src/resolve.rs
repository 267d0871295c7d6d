//! Resolution of raw command arguments into canonical paths.
//!
//! Every path-bearing command resolves its argument here, so `cd`, `ls`,
//! `cat`, `head` and `rmdir` agree on what a token means:
//!
//! | Token | Result |
//! |-------|--------|
//! | empty | [`Error::MissingArgument`] |
//! | `.` | the current directory |
//! | `..` | the parent of the current directory (root stays root) |
//! | `/x/y` | `/x/y`, normalized |
//! | `x/y` | current directory joined with `x/y` |

use crate::{Error, Result, VirtualPath};

/// Resolves `token` against `current` for the command `command`.
///
/// A missing or empty token is reported as [`Error::MissingArgument`]
/// attributed to `command`.
///
/// # Example
///
/// ```
/// use vshell::{VirtualPath, resolve::resolve};
///
/// let cwd = VirtualPath::new("/a/b").unwrap();
/// assert_eq!(resolve(&cwd, Some(".."), "cd").unwrap().as_str(), "/a");
/// assert_eq!(resolve(&cwd, Some("c.txt"), "cat").unwrap().as_str(), "/a/b/c.txt");
/// assert_eq!(resolve(&cwd, Some("/x"), "ls").unwrap().as_str(), "/x");
/// assert!(resolve(&cwd, None, "head").is_err());
/// ```
pub fn resolve(
    current: &VirtualPath,
    token: Option<&str>,
    command: &'static str,
) -> Result<VirtualPath> {
    let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => return Err(Error::MissingArgument { command }),
    };

    let resolved = match token {
        "." => current.clone(),
        ".." => current.parent(),
        absolute if absolute.starts_with('/') => VirtualPath::new(absolute)?,
        relative => current.join(relative)?,
    };

    log::trace!("Resolved '{}' in {} to {}", token, current, resolved);
    Ok(resolved)
}

/// Resolves the target of a change-directory command.
///
/// Unlike [`resolve`], a missing argument means the root.
pub fn resolve_cd(current: &VirtualPath, token: Option<&str>) -> Result<VirtualPath> {
    match token {
        None | Some("") => Ok(VirtualPath::root()),
        token => resolve(current, token, "cd"),
    }
}
