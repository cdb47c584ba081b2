pub mod config_dirs;
pub mod read_settings;
pub mod write_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_settings_path, log_dir};
pub use read_settings::{load_settings, load_settings_from};
pub use write_settings::{save_settings, Settings};
