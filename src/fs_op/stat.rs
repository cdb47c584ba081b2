use std::fs::{self, Metadata};
use std::path::Path;

use super::entry::EntryKind;
use super::error::{FsOpError, FsResult};

/// Fetch metadata for `path`, following symlinks.
///
/// A symlink whose target cannot be reached (dangling, looping) still exists
/// as a directory entry, so its own link metadata is returned instead.
pub fn metadata_lenient(path: &Path) -> FsResult<Metadata> {
    match fs::metadata(path) {
        Ok(m) => Ok(m),
        Err(e) => match fs::symlink_metadata(path) {
            Ok(link) if link.file_type().is_symlink() => Ok(link),
            _ => Err(FsOpError::io(path, e)),
        },
    }
}

/// Classify `path`, following symlinks.
pub fn classify(path: &Path) -> FsResult<EntryKind> {
    Ok(EntryKind::from_file_type(metadata_lenient(path)?.file_type()))
}

/// Classify `path` itself without following a trailing symlink.
///
/// Returns `None` for a symlink so callers can decide how to treat links.
pub fn classify_link(path: &Path) -> FsResult<Option<EntryKind>> {
    let meta = fs::symlink_metadata(path).map_err(|e| FsOpError::io(path, e))?;
    let ft = meta.file_type();
    if ft.is_symlink() {
        Ok(None)
    } else {
        Ok(Some(EntryKind::from_file_type(ft)))
    }
}

/// Return `true` when something (even a dangling symlink) exists at `path`.
pub fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn classify_nonexistent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("no_such_file_hopefully");
        assert!(matches!(classify(&p), Err(FsOpError::NotFound(_))));
        assert!(!exists(&p));
    }

    #[test]
    fn classify_file_and_dir() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        assert_eq!(classify(&file).unwrap(), EntryKind::File);
        assert_eq!(classify_link(&file).unwrap(), Some(EntryKind::File));

        let dir = tmp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        assert_eq!(classify(&dir).unwrap(), EntryKind::Directory);
        assert!(exists(&dir));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_other() {
        let tmp = tempdir().unwrap();
        let link = tmp.path().join("dangling");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();
        assert_eq!(classify(&link).unwrap(), EntryKind::Other);
        assert_eq!(classify_link(&link).unwrap(), None);
        assert!(exists(&link));
    }

    #[cfg(unix)]
    #[test]
    fn self_referential_symlink_is_other() {
        let tmp = tempdir().unwrap();
        let link = tmp.path().join("loop");
        std::os::unix::fs::symlink("loop", &link).unwrap();
        assert_eq!(classify(&link).unwrap(), EntryKind::Other);
    }
}
