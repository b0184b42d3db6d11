use std::path::PathBuf;
use tubeq_core::{DownloadQueue, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeChoice {
    Pick(Mode),
    Quit,
    Invalid(String),
}

/// One trimmed line typed at the URL prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlInput {
    Quit,
    Blank,
    Url(String),
    Invalid(String),
}

/// How URL collection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    Ready(DownloadQueue),
    Empty,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    ModeDeclined,
    NothingQueued,
    Quit,
    Downloaded { count: usize },
    Failed { remaining: usize },
}

impl SessionEnd {
    /// Whether the last screen should stay up until the user confirms.
    pub fn needs_acknowledgement(&self) -> bool {
        matches!(
            self,
            SessionEnd::ModeDeclined
                | SessionEnd::Quit
                | SessionEnd::Downloaded { .. }
                | SessionEnd::Failed { .. }
        )
    }
}

pub struct SessionArgs {
    pub output_dir: PathBuf,
    pub ytdlp: PathBuf,
    pub mode: Option<Mode>,
    pub urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_an_empty_queue_skips_the_exit_prompt() {
        assert!(SessionEnd::ModeDeclined.needs_acknowledgement());
        assert!(SessionEnd::Quit.needs_acknowledgement());
        assert!(SessionEnd::Downloaded { count: 1 }.needs_acknowledgement());
        assert!(SessionEnd::Failed { remaining: 2 }.needs_acknowledgement());
        assert!(!SessionEnd::NothingQueued.needs_acknowledgement());
    }
}
