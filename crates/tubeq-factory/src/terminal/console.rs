use super::{style_for, Prompt};
use anyhow::{Context, Result};
use dialoguer::{console::Term, theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};
use tubeq_core::Tone;

/// Interactive prompt on the process's stdout/stdin.
pub struct ConsolePrompt {
    term: Term,
    theme: ColorfulTheme,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ConsolePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(line)
    }

    fn say(&mut self, tone: Tone, message: &str) {
        let styled = style_for(tone).apply_to(message).to_string();
        // Nothing useful to do if stdout is gone.
        let _ = self.term.write_line(&styled);
    }

    fn clear(&mut self) {
        let _ = self.term.clear_screen();
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        self.term
            .write_str(prompt)
            .and_then(|_| self.term.read_line())
            .context("Failed to read acknowledgement")?;
        Ok(())
    }

    fn progress_bar(&self) -> ProgressBar {
        let pb = ProgressBar::new(100);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
