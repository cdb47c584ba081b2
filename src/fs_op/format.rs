//! Human-readable rendering of sizes.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count with two decimals, dividing by 1024 while the value
/// is at least 1024 and a larger unit remains. Never goes past `TB`.
pub fn format_file_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}
