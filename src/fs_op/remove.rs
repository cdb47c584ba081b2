use std::fs;

use super::context::DirectoryContext;
use super::entry::EntryKind;
use super::error::{FsOpError, FsResult};
use super::stat;

/// Delete the non-directory entry `dir/name`.
///
/// No confirmation happens here. A symlink is removed itself, even when it
/// points at a directory; real directories are refused with `IsADirectory`.
pub fn delete_file(dir: &DirectoryContext, name: &str) -> FsResult<()> {
    let path = dir.join_input(name);
    if stat::classify_link(&path)? == Some(EntryKind::Directory) {
        return Err(FsOpError::IsADirectory(path));
    }
    fs::remove_file(&path).map_err(|e| FsOpError::io(&path, e))?;
    tracing::debug!(path = %path.display(), "deleted file");
    Ok(())
}

/// Recursively delete the directory `dir/name` and everything beneath it.
///
/// Irreversible. An interrupted removal leaves whatever was not yet deleted
/// in place and reports the failure as `Io`. Symlinks are refused with
/// `NotADirectory`; use [`delete_file`] for those.
pub fn delete_directory(dir: &DirectoryContext, name: &str) -> FsResult<()> {
    let path = dir.join_input(name);
    if stat::classify_link(&path)? != Some(EntryKind::Directory) {
        return Err(FsOpError::NotADirectory(path));
    }
    fs::remove_dir_all(&path).map_err(|e| FsOpError::raw_io(&path, e))?;
    tracing::debug!(path = %path.display(), "deleted directory tree");
    Ok(())
}
