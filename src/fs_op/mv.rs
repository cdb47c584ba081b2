use std::fs;

use super::context::DirectoryContext;
use super::error::{FsOpError, FsResult};
use super::stat;

/// Move (rename) `source` to `destination`, both resolved against `dir`
/// unless absolute.
///
/// This is a single `rename`: atomic on one filesystem, and an `Io` error
/// across devices. There is no copy+remove fallback.
pub fn move_file(dir: &DirectoryContext, source: &str, destination: &str) -> FsResult<()> {
    let src = dir.join_input(source);
    let dst = dir.join_input(destination);

    if !stat::exists(&src) {
        return Err(FsOpError::NotFound(src));
    }
    // A NotFound from rename at this point means the destination's parent is
    // missing, not the source, so keep it as a plain I/O failure.
    fs::rename(&src, &dst).map_err(|e| FsOpError::raw_io(&dst, e))?;
    tracing::debug!(from = %src.display(), to = %dst.display(), "moved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn moves_content() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), "data").unwrap();
        let ctx = DirectoryContext::new(td.path()).unwrap();

        move_file(&ctx, "a.txt", "b.txt").unwrap();
        assert!(!td.path().join("a.txt").exists());
        assert_eq!(fs::read_to_string(td.path().join("b.txt")).unwrap(), "data");
    }

    #[test]
    fn moves_directories_too() {
        let td = tempdir().unwrap();
        fs::create_dir_all(td.path().join("src/inner")).unwrap();
        fs::create_dir(td.path().join("dest")).unwrap();
        let ctx = DirectoryContext::new(td.path()).unwrap();

        move_file(&ctx, "src", "dest/moved").unwrap();
        assert!(td.path().join("dest/moved/inner").is_dir());
    }

    #[test]
    fn missing_source_leaves_directory_unchanged() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("other"), "x").unwrap();
        let ctx = DirectoryContext::new(td.path()).unwrap();

        assert!(matches!(move_file(&ctx, "nope", "b"), Err(FsOpError::NotFound(_))));
        let names: Vec<_> = fs::read_dir(td.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
        assert_eq!(names, vec![std::ffi::OsString::from("other")]);
    }

    #[test]
    fn missing_destination_parent_is_io() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a"), "x").unwrap();
        let ctx = DirectoryContext::new(td.path()).unwrap();
        assert!(matches!(move_file(&ctx, "a", "no/such/b"), Err(FsOpError::Io { .. })));
        assert!(td.path().join("a").exists());
    }
}
