use crate::fs_op::{format_file_size, EntryInfo};

const NAME_WIDTH: usize = 33;

/// Render a directory listing as a fixed-width table.
///
/// Columns: type tag, name (truncated to 33 characters), size (`---` for
/// anything but regular files) and the `rwxr-xr-x` permission string.
pub fn format_listing(entries: &[EntryInfo]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 3);
    lines.push(format!(
        "{:<7} {:<name$} {:<12} {}",
        "Type",
        "Name",
        "Size",
        "Permissions",
        name = NAME_WIDTH
    ));
    lines.push("-".repeat(7 + 1 + NAME_WIDTH + 1 + 12 + 1 + 11));
    if entries.is_empty() {
        lines.push("(empty directory)".to_string());
    }
    for e in entries {
        let name: String = e.name.chars().take(NAME_WIDTH).collect();
        let size = e.size.map(format_file_size).unwrap_or_else(|| "---".to_string());
        lines.push(format!(
            "{:<7} {:<name$} {:<12} {}",
            e.kind.tag(),
            name,
            size,
            e.permissions,
            name = NAME_WIDTH
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::{EntryKind, PermissionMask};
    use std::path::PathBuf;

    fn entry(name: &str, kind: EntryKind, size: Option<u64>, mode: u32) -> EntryInfo {
        EntryInfo {
            name: name.to_string(),
            path: PathBuf::from("/x").join(name),
            kind,
            size,
            permissions: PermissionMask::from_bits(mode).unwrap(),
            modified: None,
        }
    }

    #[test]
    fn rows_carry_tag_size_and_permissions() {
        let rows = format_listing(&[
            entry("src", EntryKind::Directory, None, 0o755),
            entry("Cargo.toml", EntryKind::File, Some(2048), 0o644),
        ]);
        assert_eq!(rows.len(), 4);
        assert!(rows[2].starts_with("[DIR]"));
        assert!(rows[2].contains("---"));
        assert!(rows[2].ends_with("rwxr-xr-x"));
        assert!(rows[3].starts_with("[FILE]"));
        assert!(rows[3].contains("2.00 KB"));
        assert!(rows[3].ends_with("rw-r--r--"));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "n".repeat(50);
        let rows = format_listing(&[entry(&long, EntryKind::File, Some(1), 0o600)]);
        assert!(rows[2].contains(&"n".repeat(33)));
        assert!(!rows[2].contains(&"n".repeat(34)));
    }

    #[test]
    fn empty_listing_says_so() {
        let rows = format_listing(&[]);
        assert_eq!(rows.last().unwrap(), "(empty directory)");
    }
}
