use crate::fs_op::{format_file_size, EntryInfo, PermissionMask, Triad};

/// Format the key statistics of an entry, one field per line.
pub fn format_file_stats(e: &EntryInfo) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Name:        {}", e.name));
    lines.push(format!("Path:        {}", e.path.display()));
    lines.push(format!("Type:        {}", e.kind));
    if let Some(size) = e.size {
        lines.push(format!("Size:        {} ({} bytes)", format_file_size(size), size));
    }
    lines.push(format!("Permissions: {}", e.permissions));
    lines.push(format!("Octal:       {}", e.permissions.octal()));
    let modified = e
        .modified
        .as_ref()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "(unknown)".into());
    lines.push(format!("Modified:    {}", modified));
    lines
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

fn triad_line(label: &str, t: Triad) -> String {
    format!(
        "{:<7} Read={} Write={} Execute={}",
        label,
        yes_no(t.read),
        yes_no(t.write),
        yes_no(t.execute)
    )
}

/// Symbolic and octal forms followed by a per-class breakdown.
pub fn format_permission_breakdown(mask: PermissionMask) -> Vec<String> {
    vec![
        format!("Permissions: {}", mask),
        format!("Octal:       {}", mask.octal()),
        String::new(),
        triad_line("Owner:", mask.owner()),
        triad_line("Group:", mask.group()),
        triad_line("Others:", mask.other()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::EntryKind;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    #[test]
    fn format_file_stats_contains_expected_fields() {
        let entry = EntryInfo {
            name: "foo.txt".into(),
            path: PathBuf::from("/tmp/foo.txt"),
            kind: EntryKind::File,
            size: Some(42),
            permissions: PermissionMask::from_bits(0o644).unwrap(),
            modified: Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).single(),
        };
        let lines = format_file_stats(&entry);
        assert_eq!(lines[0], "Name:        foo.txt");
        assert!(lines.iter().any(|l| l == "Type:        File"));
        assert!(lines.iter().any(|l| l == "Size:        42.00 B (42 bytes)"));
        assert!(lines.iter().any(|l| l == "Permissions: rw-r--r--"));
        assert!(lines.iter().any(|l| l == "Modified:    2024-03-09 14:05:00"));
    }

    #[test]
    fn directories_have_no_size_line() {
        let entry = EntryInfo {
            name: "bin".into(),
            path: PathBuf::from("/bin"),
            kind: EntryKind::Directory,
            size: None,
            permissions: PermissionMask::from_bits(0o755).unwrap(),
            modified: None,
        };
        let lines = format_file_stats(&entry);
        assert!(!lines.iter().any(|l| l.starts_with("Size:")));
        assert!(lines.iter().any(|l| l == "Modified:    (unknown)"));
    }

    #[test]
    fn breakdown_lists_each_class() {
        let lines = format_permission_breakdown(PermissionMask::from_bits(0o640).unwrap());
        assert_eq!(lines[0], "Permissions: rw-r-----");
        assert_eq!(lines[3], "Owner:  Read=Yes Write=Yes Execute=No");
        assert_eq!(lines[4], "Group:  Read=Yes Write=No Execute=No");
        assert_eq!(lines[5], "Others: Read=No Write=No Execute=No");
    }
}
