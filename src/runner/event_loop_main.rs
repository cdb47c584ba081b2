use anyhow::Context;
use console::{style, Term};

use crate::app::{App, MenuAction};
use crate::runner::handlers;
use crate::runner::prompt::{Prompter, TermPrompter};
use crate::ui;

/// Run the interactive menu on the attached terminal until the user exits.
pub fn run_app(app: &mut App) -> anyhow::Result<()> {
    let term = Term::stdout();
    let mut prompter = TermPrompter::new(term.clone());
    run_loop(app, &mut prompter, &term)
}

/// Menu loop over any prompter; output goes to `term`.
pub fn run_loop(app: &mut App, prompter: &mut dyn Prompter, term: &Term) -> anyhow::Result<()> {
    tracing::info!(cwd = %app.ctx, "session started");
    let labels = MenuAction::labels();

    loop {
        term.clear_screen().context("clearing screen")?;
        write_header(term, app)?;

        let idx = prompter.select("MAIN MENU", &labels)?;
        let action = MenuAction::from_index(idx)
            .with_context(|| format!("menu returned out-of-range index {}", idx))?;
        tracing::debug!(%action, "menu selection");

        term.clear_screen().context("clearing screen")?;
        if action != MenuAction::Exit {
            write_header(term, app)?;
        }

        let lines = handlers::handle_action(app, action, prompter)?;
        for line in &lines {
            write_styled(term, line)?;
        }

        if action == MenuAction::Exit {
            break;
        }
        prompter.pause()?;
    }

    tracing::info!("session ended");
    Ok(())
}

fn write_header(term: &Term, app: &App) -> anyhow::Result<()> {
    for (i, line) in ui::header_lines(&app.ctx).iter().enumerate() {
        if i == 0 {
            term.write_line(&style(line).bold().cyan().to_string())?;
        } else {
            term.write_line(line)?;
        }
    }
    term.write_line("")?;
    Ok(())
}

fn write_styled(term: &Term, line: &str) -> anyhow::Result<()> {
    if line.starts_with("Error:") {
        term.write_line(&style(line).red().to_string())?;
    } else {
        term.write_line(line)?;
    }
    Ok(())
}
