use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{FsOpError, FsResult};

/// The caller-held "current directory".
///
/// Always an absolute, canonicalized path to a directory at the time it was
/// built. The façade only ever reads it; navigation hands back a fresh value
/// for the caller to adopt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryContext {
    path: PathBuf,
}

impl DirectoryContext {
    /// Canonicalize `path` and check it names a directory.
    pub fn new(path: impl AsRef<Path>) -> FsResult<Self> {
        let p = path.as_ref();
        let canonical = fs::canonicalize(p).map_err(|e| FsOpError::io(p, e))?;
        if !canonical.is_dir() {
            return Err(FsOpError::NotADirectory(canonical));
        }
        Ok(DirectoryContext { path: canonical })
    }

    /// Context for the process working directory.
    pub fn current() -> FsResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| FsOpError::raw_io(".", e))?;
        Self::new(cwd)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve user input against this directory: absolute input is taken
    /// as-is, anything else is joined. No filesystem access.
    pub fn join_input(&self, input: &str) -> PathBuf {
        let candidate = Path::new(input);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.path.join(candidate)
        }
    }
}

impl fmt::Display for DirectoryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for DirectoryContext {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
