//! One-shot (non-interactive) commands.
//!
//! Same façade calls as the menu handlers, but failures are returned as
//! errors so the process exits non-zero.

use anyhow::Context;

use crate::app::settings::{default_settings_path, save_settings, Settings};
use crate::app::App;
use crate::cli::Command;
use crate::fs_op::{self, PermissionMask};
use crate::ui;

/// Execute `command` and return the text to print.
///
/// `config_path` is where `init-config` writes; `None` means the per-user
/// default location.
pub fn execute_command(
    app: &App,
    command: &Command,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<Vec<String>> {
    match command {
        Command::List => {
            let entries = fs_op::list(&app.ctx)
                .with_context(|| format!("listing {}", app.ctx))?;
            Ok(ui::format_listing(&entries))
        }
        Command::Search { term } => {
            let mut search = fs_op::search(&app.ctx, term);
            let matches: Vec<_> = search.by_ref().collect();
            Ok(ui::format_search_results(term, &matches, search.warnings()))
        }
        Command::Details { name } => {
            let info = fs_op::get_details(&app.ctx, name)?;
            Ok(ui::format_file_stats(&info))
        }
        Command::Perms { name, mode: None } => {
            let mask = fs_op::get_permissions(&app.ctx, name)?;
            Ok(ui::format_permission_breakdown(mask))
        }
        Command::Perms { name, mode: Some(text) } => {
            let mask = PermissionMask::parse_octal(text)?;
            fs_op::set_permissions(&app.ctx, name, mask)?;
            let now = fs_op::get_permissions(&app.ctx, name)?;
            Ok(vec![format!("New permissions: {} ({})", now, now.octal())])
        }
        Command::InitConfig { force } => {
            let path = match config_path {
                Some(p) => p.to_path_buf(),
                None => default_settings_path()
                    .context("could not determine the configuration directory")?,
            };
            save_settings(&Settings::default(), &path, *force)?;
            Ok(vec![format!("Wrote {}", path.display())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::FsOpError;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path) -> App {
        App::with_start_dir(Some(dir), Settings::default()).unwrap()
    }

    #[test]
    fn list_renders_table() {
        let td = tempdir().unwrap();
        std::fs::write(td.path().join("a.txt"), "a").unwrap();
        let lines = execute_command(&app_in(td.path()), &Command::List, None).unwrap();
        assert!(lines.iter().any(|l| l.starts_with("[FILE]") && l.contains("a.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn perms_sets_and_reports() {
        let td = tempdir().unwrap();
        std::fs::write(td.path().join("f"), "x").unwrap();
        let app = app_in(td.path());
        let cmd = Command::Perms { name: "f".into(), mode: Some("600".into()) };
        let lines = execute_command(&app, &cmd, None).unwrap();
        assert_eq!(lines, vec!["New permissions: rw------- (600)"]);
    }

    #[test]
    fn bad_mode_is_invalid_mask() {
        let td = tempdir().unwrap();
        std::fs::write(td.path().join("f"), "x").unwrap();
        let cmd = Command::Perms { name: "f".into(), mode: Some("999".into()) };
        let err = execute_command(&app_in(td.path()), &cmd, None).unwrap_err();
        assert!(matches!(err.downcast_ref::<FsOpError>(), Some(FsOpError::InvalidMask(_))));
    }

    #[test]
    fn init_config_writes_once() {
        let td = tempdir().unwrap();
        let cfg = td.path().join("cfg/settings.toml");
        let app = app_in(td.path());
        let cmd = Command::InitConfig { force: false };
        execute_command(&app, &cmd, Some(&cfg)).unwrap();
        assert!(cfg.exists());
        assert!(execute_command(&app, &cmd, Some(&cfg)).is_err());
    }
}
