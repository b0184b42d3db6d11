mod cli;
mod core;
mod types;
mod utils;
mod ytdlp;

pub use cli::run_cli;
pub use self::core::process_batch;
pub use types::{BatchOutcome, BatchStatus, DownloadEngine, EngineError, FetchStatus};
pub use utils::{build_ytdlp_args, check_dependencies};
pub use ytdlp::YtDlpEngine;
