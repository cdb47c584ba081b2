//! User input seam for the interactive shell.
//!
//! Handlers only talk to a [`Prompter`], so they can be driven by the real
//! terminal ([`TermPrompter`]) or by scripted answers in tests.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

pub trait Prompter {
    /// Free-text answer; may be empty.
    fn input(&mut self, prompt: &str) -> anyhow::Result<String>;
    /// Yes/no question, defaulting to "no".
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
    /// Index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<usize>;
    /// Block until the user acknowledges the current screen.
    fn pause(&mut self) -> anyhow::Result<()>;
}

/// `dialoguer`-backed prompter on a `console` terminal.
pub struct TermPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new(term: Term) -> Self {
        TermPrompter {
            term,
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TermPrompter {
    fn input(&mut self, prompt: &str) -> anyhow::Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        let yes = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_on(&self.term)?;
        Ok(yes)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
        let idx = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_on(&self.term)?;
        Ok(idx)
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        self.term.write_str("\nPress Enter to continue...")?;
        self.term.read_line()?;
        Ok(())
    }
}
