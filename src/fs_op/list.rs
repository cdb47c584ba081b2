use std::cmp::Ordering;
use std::fs;

use super::context::DirectoryContext;
use super::entry::EntryInfo;
use super::error::{FsOpError, FsResult};
use super::stat;

/// List the immediate children of `dir`.
///
/// Directories come first, then everything else; each group is sorted by
/// name (byte-wise, case-sensitive). Symlinks are classified by their target,
/// so a link to a directory sorts with the directories.
///
/// Any error while enumerating discards what was gathered so far and is
/// returned as-is; there is no partial result.
pub fn list(dir: &DirectoryContext) -> FsResult<Vec<EntryInfo>> {
    let root = dir.path();
    let reader = fs::read_dir(root).map_err(|e| FsOpError::io(root, e))?;

    let mut entries = Vec::new();
    for item in reader {
        let item = item.map_err(|e| FsOpError::raw_io(root, e))?;
        let path = item.path();
        let meta = stat::metadata_lenient(&path)?;
        let name = item.file_name().to_string_lossy().into_owned();
        entries.push(EntryInfo::from_metadata(name, path, &meta));
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Directories first, then ascending by name.
pub fn sort_entries(entries: &mut [EntryInfo]) {
    entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.as_bytes().cmp(b.name.as_bytes()),
    });
}
