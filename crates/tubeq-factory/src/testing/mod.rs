//! Doubles for driving the session and dispatcher without a terminal or yt-dlp.

mod fake_engine;
mod scripted_prompt;

pub use fake_engine::FakeEngine;
pub use scripted_prompt::ScriptedPrompt;
