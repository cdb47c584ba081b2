use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the filesystem façade.
///
/// Every operation in `fs_op` reports failures through this type; nothing is
/// retried or silently recovered.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Target path is absent.
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Creation target is already present.
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Operation needs a directory but found something else.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Operation needs a non-directory but found a directory.
    #[error("is a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    /// Permission value outside 0..=0o777 or not parseable as octal.
    #[error("invalid permission mask: {0}")]
    InvalidMask(String),

    /// A required environment value (for example the home directory) is missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// Catch-all for underlying filesystem failures.
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type FsResult<T> = Result<T, FsOpError>;

impl FsOpError {
    /// Classify an `io::Error` raised while operating on `path`.
    ///
    /// `NotFound` and `AlreadyExists` kinds map onto the dedicated variants;
    /// everything else keeps the original error as `Io`.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => FsOpError::NotFound(path),
            io::ErrorKind::AlreadyExists => FsOpError::AlreadyExists(path),
            _ => FsOpError::Io { path, source },
        }
    }

    /// Wrap an `io::Error` as `Io` without classifying it.
    pub fn raw_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        FsOpError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kinds_are_classified() {
        let e = FsOpError::io("/x", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(e, FsOpError::NotFound(p) if p == Path::new("/x")));

        let e = FsOpError::io("/x", io::Error::from(io::ErrorKind::AlreadyExists));
        assert!(matches!(e, FsOpError::AlreadyExists(_)));

        let e = FsOpError::io("/x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(e, FsOpError::Io { .. }));
    }

    #[test]
    fn display_includes_path() {
        let e = FsOpError::IsADirectory(PathBuf::from("/tmp/sub"));
        assert_eq!(e.to_string(), "is a directory: /tmp/sub");
    }
}
