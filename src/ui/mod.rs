//! Plain-text rendering of façade values.
//!
//! Everything here returns lines of text and never writes to a terminal, so
//! the same output serves the interactive shell, the one-shot commands and
//! tests. Styling is applied by the caller.

pub mod file_stats_ui;
pub mod header;
pub mod listing;
pub mod search_ui;

pub use file_stats_ui::{format_file_stats, format_permission_breakdown};
pub use header::{farewell_lines, header_lines, section_title};
pub use listing::format_listing;
pub use search_ui::format_search_results;
