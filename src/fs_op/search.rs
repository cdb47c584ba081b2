//! Recursive, case-sensitive substring search by entry name.
//!
//! The walk is depth-first with siblings visited in file-name order, so the
//! output is stable for a given filesystem snapshot. Symlinked directories
//! are not descended into, which guarantees termination on cyclic trees; a
//! symlink is still matched by its own name and reported with the kind of
//! its target.
//!
//! Unreadable subtrees do not abort the walk. Each one is logged and kept as
//! a [`SearchWarning`] on the iterator.

use std::path::PathBuf;

use walkdir::WalkDir;

use super::context::DirectoryContext;
use super::entry::EntryKind;
use super::stat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// A subtree or entry that could not be visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchWarning {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Lazy, finite, non-restartable sequence of matches.
pub struct Search {
    walker: walkdir::IntoIter,
    term: String,
    warnings: Vec<SearchWarning>,
}

/// Start a search for `term` beneath `root` (the root itself is not tested).
///
/// An empty `term` matches every entry.
pub fn search(root: &DirectoryContext, term: &str) -> Search {
    let walker = WalkDir::new(root.path())
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    Search {
        walker,
        term: term.to_string(),
        warnings: Vec::new(),
    }
}

impl Search {
    /// Problems hit so far; complete once the iterator is exhausted.
    pub fn warnings(&self) -> &[SearchWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<SearchWarning> {
        self.warnings
    }
}

impl Iterator for Search {
    type Item = SearchMatch;

    fn next(&mut self) -> Option<SearchMatch> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf());
                    tracing::warn!(path = ?path, error = %err, "skipping unreadable entry during search");
                    self.warnings.push(SearchWarning {
                        path,
                        message: err.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_name().to_string_lossy().contains(self.term.as_str()) {
                continue;
            }

            let ft = entry.file_type();
            let kind = if ft.is_symlink() {
                stat::classify(entry.path()).unwrap_or(EntryKind::Other)
            } else {
                EntryKind::from_file_type(ft)
            };
            return Some(SearchMatch {
                path: entry.into_path(),
                kind,
            });
        }
    }
}
