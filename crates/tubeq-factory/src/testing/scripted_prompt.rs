use crate::terminal::Prompt;
use anyhow::{bail, Result};
use std::collections::VecDeque;
use tubeq_core::Tone;

/// Answers prompts from a fixed script and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<(Tone, String)>,
    pub acknowledgements: Vec<String>,
    pub clears: usize,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// Messages shown with `tone`, in order.
    pub fn said(&self, tone: Tone) -> Vec<&str> {
        self.output
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|(_, msg)| msg.contains(needle))
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("script ran out of answers at {:?}", prompt),
        }
    }

    fn say(&mut self, tone: Tone, message: &str) {
        self.output.push((tone, message.to_string()));
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        self.acknowledgements.push(prompt.to_string());
        Ok(())
    }
}
