use std::fmt;
use std::path::{Path, PathBuf};

/// What the user wants out of each URL. Picked once per session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Full,
    Audio,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Full => "full",
            Mode::Audio => "audio",
        }
    }

    /// Engine options for this mode, rooted at `output_dir`.
    pub fn options(&self, output_dir: &Path) -> DownloadOptions {
        let output_template = output_dir.join(format_spec::OUTPUT_TEMPLATE);
        match self {
            Mode::Full => DownloadOptions {
                format: format_spec::BEST_VIDEO_AUDIO.to_string(),
                output_template,
                post_processor: None,
            },
            Mode::Audio => DownloadOptions {
                format: format_spec::BEST_AUDIO.to_string(),
                output_template,
                post_processor: Some(PostProcessor::ExtractAudio {
                    codec: format_spec::AUDIO_CODEC.to_string(),
                    quality: format_spec::AUDIO_QUALITY.to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostProcessor {
    ExtractAudio { codec: String, quality: String },
}

/// Configuration handed to the download engine for every URL of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    pub format: String,
    pub output_template: PathBuf,
    pub post_processor: Option<PostProcessor>,
}

/// Ordered list of URLs waiting for the next batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadQueue {
    urls: Vec<String>,
}

impl DownloadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    /// Drops the first `count` entries, keeping the order of the rest.
    pub fn drain_front(&mut self, count: usize) {
        let count = count.min(self.urls.len());
        self.urls.drain(..count);
    }

    pub fn clear(&mut self) {
        self.urls.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for DownloadQueue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Semantic output level. Turned into colors only where text hits the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Banner,
    Heading,
    Info,
    Item,
    Success,
    Warning,
    Error,
}

pub mod format_spec {
    pub const BEST_VIDEO_AUDIO: &str = "bv*+ba/b";
    pub const BEST_AUDIO: &str = "bestaudio/best";

    pub const OUTPUT_TEMPLATE: &str = "%(uploader)s/%(title)s.%(ext)s";

    pub const AUDIO_CODEC: &str = "mp3";
    pub const AUDIO_QUALITY: &str = "192";
}
