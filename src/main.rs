use anyhow::Context;
use clap::Parser;

use file_explorer::app::settings::{self, load_settings, load_settings_from};
use file_explorer::cli::Cli;
use file_explorer::runner::{execute_command, run_app};
use file_explorer::{logging, App};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(p) => load_settings_from(p)?,
        None => load_settings()?,
    };
    if cli.yes {
        settings.confirm_destructive = false;
    }
    let level = cli.log_level.clone().unwrap_or_else(|| settings.log_level.clone());

    match &cli.command {
        Some(command) => {
            logging::init_stderr(&level)?;
            let app = App::with_start_dir(cli.dir.as_deref(), settings)
                .context("opening start directory")?;
            for line in execute_command(&app, command, cli.config.as_deref())? {
                println!("{}", line);
            }
            Ok(())
        }
        None => {
            // The guard must outlive the session so the log is flushed.
            let _guard = match (settings.log_to_file, settings::log_dir()) {
                (true, Some(dir)) => Some(logging::init_file(&dir, &level)?),
                _ => None,
            };
            let mut app = App::with_start_dir(cli.dir.as_deref(), settings)
                .context("opening start directory")?;
            run_app(&mut app)
        }
    }
}
