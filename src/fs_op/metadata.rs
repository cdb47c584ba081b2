use std::fs;
use std::path::PathBuf;

use super::context::DirectoryContext;
use super::entry::EntryInfo;
use super::error::FsResult;
use super::stat;

/// Read name, absolute path, kind, size (files only), permissions and
/// last-modified time (host local clock) of `dir/name`.
///
/// Symlinks are followed; a dangling link is reported as `Other`.
pub fn get_details(dir: &DirectoryContext, name: &str) -> FsResult<EntryInfo> {
    let raw = dir.join_input(name);
    let meta = stat::metadata_lenient(&raw)?;
    let path = normalize(raw);
    let display = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    Ok(EntryInfo::from_metadata(display, path, &meta))
}

// Canonicalize the parent only, so a symlink keeps its own name. Paths
// ending in `.` or `..` have no file name and are canonicalized whole.
fn normalize(path: PathBuf) -> PathBuf {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(file)) => match fs::canonicalize(parent) {
            Ok(p) => p.join(file),
            Err(_) => path,
        },
        _ => fs::canonicalize(&path).unwrap_or(path),
    }
}
