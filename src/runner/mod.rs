//! Interactive shell (menu loop, per-action handlers, input seam) and the
//! one-shot command runner.

pub mod commands;
pub mod event_loop_main;
pub mod handlers;
pub mod prompt;

pub use commands::execute_command;
pub use event_loop_main::{run_app, run_loop};
pub use handlers::handle_action;
pub use prompt::{Prompter, TermPrompter};
