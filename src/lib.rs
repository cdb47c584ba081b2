pub mod app;
pub mod cli;
pub mod fs_op;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{App, MenuAction, Settings};
pub use crate::fs_op::{DirectoryContext, EntryInfo, EntryKind, FsOpError, PermissionMask};
