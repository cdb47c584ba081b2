use std::fs;
use std::io;
use std::path::Path;

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

use super::context::DirectoryContext;
use super::entry::EntryKind;
use super::error::{FsOpError, FsResult};
use super::stat;

/// Copy the regular file `source` to `destination`, both resolved against
/// `dir` unless absolute.
///
/// An existing destination file is overwritten without asking; confirmation
/// belongs to the caller. The source's permission bits are carried over
/// by the underlying copy.
/// Directories are refused with `IsADirectory`.
pub fn copy_file(dir: &DirectoryContext, source: &str, destination: &str) -> FsResult<()> {
    let src = dir.join_input(source);
    let dst = dir.join_input(destination);

    if stat::classify(&src)? == EntryKind::Directory {
        return Err(FsOpError::IsADirectory(src));
    }
    if same_file(&src, &dst) {
        return Err(FsOpError::raw_io(
            &dst,
            io::Error::new(io::ErrorKind::InvalidInput, "source and destination are the same file"),
        ));
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;
    // The source was checked above; whatever fails now is on the destination side.
    fs_extra_copy(&src, &dst, &options).map_err(|e| FsOpError::raw_io(&dst, into_io(e)))?;

    tracing::debug!(from = %src.display(), to = %dst.display(), "copied file");
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

// fs_extra wraps its own error type; unwrap the io::Error where there is one.
fn into_io(e: fs_extra::error::Error) -> io::Error {
    let msg = e.to_string();
    match e.kind {
        fs_extra::error::ErrorKind::Io(inner) => inner,
        fs_extra::error::ErrorKind::NotFound => io::Error::new(io::ErrorKind::NotFound, msg),
        fs_extra::error::ErrorKind::PermissionDenied => {
            io::Error::new(io::ErrorKind::PermissionDenied, msg)
        }
        _ => io::Error::other(msg),
    }
}
