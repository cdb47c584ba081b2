use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use super::context::DirectoryContext;
use super::error::{FsOpError, FsResult};

/// Create an empty file at `dir/name`.
///
/// Never truncates: if anything already exists at the target (file,
/// directory, even a dangling symlink) the call fails with `AlreadyExists`.
pub fn create_file(dir: &DirectoryContext, name: &str) -> FsResult<()> {
    let path = dir.join_input(name);
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| creation_error(&path, e))?;
    tracing::debug!(path = %path.display(), "created file");
    Ok(())
}

/// Create a single directory level at `dir/name`; missing parents are not created.
pub fn create_directory(dir: &DirectoryContext, name: &str) -> FsResult<()> {
    let path = dir.join_input(name);
    fs::create_dir(&path).map_err(|e| creation_error(&path, e))?;
    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}

// Only an occupied target is classified; a missing parent is plain I/O.
fn creation_error(path: &Path, e: io::Error) -> FsOpError {
    if e.kind() == io::ErrorKind::AlreadyExists {
        FsOpError::AlreadyExists(path.to_path_buf())
    } else {
        FsOpError::raw_io(path, e)
    }
}
