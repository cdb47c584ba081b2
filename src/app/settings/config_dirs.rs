//! Per-user config and cache locations.

use std::path::PathBuf;

use directories_next::ProjectDirs;

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "file_explorer")
}

/// `<config_dir>/settings.toml`, or `None` when no home directory is known.
pub fn default_settings_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join(SETTINGS_FILE))
}

/// Directory that receives the interactive session log.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}
