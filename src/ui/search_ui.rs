use crate::fs_op::{SearchMatch, SearchWarning};

/// One `[KIND] /path` line per match, then a summary.
pub fn format_search_results(
    term: &str,
    matches: &[SearchMatch],
    warnings: &[SearchWarning],
) -> Vec<String> {
    let mut lines: Vec<String> = matches
        .iter()
        .map(|m| format!("{} {}", m.kind.tag(), m.path.display()))
        .collect();

    if matches.is_empty() {
        lines.push(format!("No files found matching '{}'", term));
    } else {
        lines.push(String::new());
        lines.push(format!("Found {} item(s) matching '{}'", matches.len(), term));
    }
    if !warnings.is_empty() {
        lines.push(format!("Skipped {} unreadable location(s)", warnings.len()));
    }
    lines
}
