pub mod settings;
pub mod state;
pub mod types;

pub use settings::Settings;
pub use state::App;
pub use types::MenuAction;
