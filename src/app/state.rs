use std::path::Path;

use crate::app::settings::Settings;
use crate::fs_op::{self, DirectoryContext, FsResult};

/// Interactive session state: the current directory plus settings.
///
/// The directory is only ever replaced by a successful [`App::change_dir`].
pub struct App {
    pub ctx: DirectoryContext,
    pub settings: Settings,
}

impl App {
    pub fn new(ctx: DirectoryContext, settings: Settings) -> Self {
        App { ctx, settings }
    }

    /// Pick the starting directory: explicit override, then the configured
    /// `start_dir`, then the process working directory.
    pub fn with_start_dir(start: Option<&Path>, settings: Settings) -> FsResult<Self> {
        let ctx = match start.or(settings.start_dir.as_deref()) {
            Some(p) => DirectoryContext::new(p)?,
            None => DirectoryContext::current()?,
        };
        Ok(App::new(ctx, settings))
    }

    /// Resolve `input` and adopt the result. On failure the current
    /// directory is left untouched.
    pub fn change_dir(&mut self, input: &str) -> FsResult<&DirectoryContext> {
        let next = fs_op::resolve(&self.ctx, input)?;
        tracing::debug!(from = %self.ctx, to = %next, "changed directory");
        self.ctx = next;
        Ok(&self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn failed_change_dir_keeps_context() {
        let td = tempdir().unwrap();
        std::fs::create_dir(td.path().join("sub")).unwrap();
        let mut app = App::with_start_dir(Some(td.path()), Settings::default()).unwrap();
        let before = app.ctx.clone();

        assert!(app.change_dir("missing").is_err());
        assert_eq!(app.ctx, before);

        app.change_dir("sub").unwrap();
        assert!(app.ctx.path().ends_with("sub"));
    }

    #[test]
    fn explicit_start_beats_settings() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        let settings = Settings {
            start_dir: Some(b.path().to_path_buf()),
            ..Settings::default()
        };
        let app = App::with_start_dir(Some(a.path()), settings.clone()).unwrap();
        assert_eq!(app.ctx.path(), std::fs::canonicalize(a.path()).unwrap());

        let app = App::with_start_dir(None, settings).unwrap();
        assert_eq!(app.ctx.path(), std::fs::canonicalize(b.path()).unwrap());
    }
}
