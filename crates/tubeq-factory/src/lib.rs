pub mod dispatcher;
pub mod session;
pub mod terminal;
pub mod testing;

pub use tubeq_core::{DownloadOptions, DownloadQueue, Mode, PostProcessor, Tone};
