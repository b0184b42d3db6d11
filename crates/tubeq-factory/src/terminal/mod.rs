//! Everything the interactive loops need from a terminal, behind one trait.
//!
//! Business logic only ever talks in [`Tone`]s; [`ConsolePrompt`] decides what
//! that looks like on a real TTY.

mod console;
mod style;

pub use console::ConsolePrompt;
pub use style::{style_for, BANNER, DONE_BANNER};

use anyhow::Result;
use indicatif::ProgressBar;
use tubeq_core::Tone;

pub trait Prompt {
    /// Shows `prompt` and returns whatever the user typed, untrimmed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn say(&mut self, tone: Tone, message: &str);

    fn clear(&mut self) {}

    /// Blocks until the user confirms they have seen the screen.
    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        self.read_line(prompt).map(|_| ())
    }

    /// Bar used to show per-item download progress, 0..=100.
    fn progress_bar(&self) -> ProgressBar {
        ProgressBar::hidden()
    }
}
