use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// User settings persisted as TOML. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory the session starts in; the process cwd when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_dir: Option<PathBuf>,
    /// Ask before deleting files or directories.
    pub confirm_destructive: bool,
    /// Default tracing filter, e.g. `info` or `file_explorer=debug`.
    pub log_level: String,
    /// Write the interactive session log to the cache directory.
    pub log_to_file: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            start_dir: None,
            confirm_destructive: true,
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

/// Write `settings` to `path`, creating parent directories.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn save_settings(settings: &Settings, path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let text = toml::to_string_pretty(settings).context("serializing settings")?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "settings written");
    Ok(())
}
