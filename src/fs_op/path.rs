use std::fs;
use std::path::{Path, PathBuf};

use super::context::DirectoryContext;
use super::error::{FsOpError, FsResult};

/// Resolve navigation `input` relative to `dir` and return the new context.
///
/// Behaviour:
/// - `..` moves to the parent (stays put at the filesystem root).
/// - `~` (or `~/sub`) expands under the user's home directory; a missing home
///   is a `Config` error.
/// - Absolute input is used as-is, anything else is joined onto `dir`.
/// - Empty input resolves to `dir` itself.
/// - The target is canonicalized and must be an existing directory.
///
/// `dir` is never modified; callers adopt the returned value.
pub fn resolve(dir: &DirectoryContext, input: &str) -> FsResult<DirectoryContext> {
    resolve_with_home(dir, input, home_dir())
}

pub(crate) fn resolve_with_home(
    dir: &DirectoryContext,
    input: &str,
    home: Option<PathBuf>,
) -> FsResult<DirectoryContext> {
    let input = input.trim();

    if input == ".." {
        return match dir.path().parent() {
            Some(parent) => DirectoryContext::new(parent),
            None => Ok(dir.clone()),
        };
    }

    let candidate = if input == "~" || input.starts_with("~/") || input.starts_with("~\\") {
        let home = home.ok_or_else(|| {
            FsOpError::Config("could not determine the home directory".to_string())
        })?;
        expand_tilde(input, &home)
    } else {
        dir.join_input(input)
    };

    let canonical = fs::canonicalize(&candidate).map_err(|e| FsOpError::io(&candidate, e))?;
    if !canonical.is_dir() {
        return Err(FsOpError::NotADirectory(canonical));
    }
    DirectoryContext::new(canonical)
}

/// The invoking user's home directory: `HOME`/`USERPROFILE`, then the
/// platform lookup.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(|| directories_next::BaseDirs::new().map(|b| b.home_dir().to_path_buf()))
}

fn expand_tilde(input: &str, home: &Path) -> PathBuf {
    let rest = input
        .trim_start_matches('~')
        .trim_start_matches(|c| c == '/' || c == '\\');
    if rest.is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    }
}
