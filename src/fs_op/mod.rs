//! Filesystem façade.
//!
//! Stateless, synchronous operations over an explicit [`DirectoryContext`].
//! Nothing here touches a terminal, keeps state between calls, or asks for
//! confirmation; callers own all of that. Each submodule covers one concern:
//! listing, navigation, creation, copy/move, deletion, search, permissions
//! and metadata.

pub mod context;
pub mod copy;
pub mod create;
pub mod entry;
pub mod error;
pub mod format;
pub mod list;
pub mod metadata;
pub mod mv;
pub mod path;
pub mod permissions;
pub mod remove;
pub mod search;
pub mod stat;

pub use context::DirectoryContext;
pub use copy::copy_file;
pub use create::{create_directory, create_file};
pub use entry::{EntryInfo, EntryKind};
pub use error::{FsOpError, FsResult};
pub use format::format_file_size;
pub use list::list;
pub use metadata::get_details;
pub use mv::move_file;
pub use path::resolve;
pub use permissions::{get_permissions, set_permissions, PermissionMask, Triad};
pub use remove::{delete_directory, delete_file};
pub use search::{search, Search, SearchMatch, SearchWarning};
