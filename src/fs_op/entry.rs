use std::fmt;
use std::fs::{FileType, Metadata};
use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::permissions::PermissionMask;

/// Coarse classification of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, FIFOs, devices and dangling symlinks.
    Other,
}

impl EntryKind {
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }

    /// Short tag used in listings, e.g. `[DIR]`.
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::File => "[FILE]",
            EntryKind::Directory => "[DIR]",
            EntryKind::Other => "[OTHER]",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Directory",
            EntryKind::Other => "Other",
        };
        f.write_str(s)
    }
}

/// Snapshot of one filesystem entry, read at query time and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Byte size; `None` for anything that is not a regular file.
    pub size: Option<u64>,
    pub permissions: PermissionMask,
    pub modified: Option<DateTime<Local>>,
}

impl EntryInfo {
    /// Build an entry from already-fetched metadata.
    pub fn from_metadata(name: impl Into<String>, path: PathBuf, meta: &Metadata) -> Self {
        let kind = EntryKind::from_file_type(meta.file_type());
        EntryInfo {
            name: name.into(),
            path,
            kind,
            size: (kind == EntryKind::File).then(|| meta.len()),
            permissions: PermissionMask::from_metadata(meta),
            modified: meta.modified().ok().map(DateTime::<Local>::from),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}
