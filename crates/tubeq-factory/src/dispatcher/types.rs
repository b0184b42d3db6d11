use std::{io, path::PathBuf};
use thiserror::Error;
use tubeq_core::DownloadOptions;

/// Something that can turn a URL plus options into files on disk.
pub trait DownloadEngine {
    fn fetch(
        &mut self,
        url: &str,
        options: &DownloadOptions,
        on_status: &mut dyn FnMut(FetchStatus),
    ) -> Result<(), EngineError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Starting,
    Downloading(f32), // 0.0 - 1.0
    PostProcessing,
    Saved(PathBuf),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to launch '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("lost contact with '{program}'")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    Failed {
        status: Option<i32>,
        message: String,
    },
}

/// Progress of a batch, as seen by whoever renders it.
#[derive(Debug)]
pub enum BatchStatus<'a> {
    Working {
        index: usize, // 1-based
        total: usize,
        url: &'a str,
    },
    Fetch(FetchStatus),
    Done {
        index: usize,
        total: usize,
    },
}

#[derive(Debug)]
pub enum BatchOutcome {
    Completed {
        downloaded: usize,
    },
    /// The batch stopped at `position` (1-based). Items before it were
    /// downloaded and removed from the queue.
    Failed {
        position: usize,
        url: String,
        error: EngineError,
    },
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Completed { .. })
    }
}
