use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

use super::config_dirs::default_settings_path;
use super::write_settings::Settings;

/// Load settings from the default location; a missing file yields defaults.
pub fn load_settings() -> anyhow::Result<Settings> {
    match default_settings_path() {
        Some(p) => load_settings_from(&p),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`. A missing file yields defaults; a malformed
/// one is an error.
pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("reading settings from {}", path.display()))
        }
    };
    let settings: Settings =
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(settings)
}
