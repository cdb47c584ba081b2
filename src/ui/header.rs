use crate::fs_op::DirectoryContext;

const RULE_WIDTH: usize = 64;

/// Banner plus the current directory, shown above every screen.
pub fn header_lines(ctx: &DirectoryContext) -> Vec<String> {
    vec![
        "CONSOLE-BASED FILE EXPLORER".to_string(),
        format!("Current Directory: {}", ctx),
        "=".repeat(RULE_WIDTH),
    ]
}

pub fn farewell_lines() -> Vec<String> {
    vec![
        "Thank you for using File Explorer!".to_string(),
        "Goodbye!".to_string(),
    ]
}

/// A section title underlined to its own width.
pub fn section_title(title: &str) -> Vec<String> {
    vec![title.to_string(), "-".repeat(title.chars().count())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shows_current_directory() {
        let ctx = DirectoryContext::new("/").unwrap();
        let lines = header_lines(&ctx);
        assert!(lines.iter().any(|l| l == "Current Directory: /"));
    }

    #[test]
    fn section_title_is_underlined() {
        assert_eq!(section_title("Copy File"), vec!["Copy File", "---------"]);
    }
}
