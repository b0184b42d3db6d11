mod cli;
mod core;
mod types;
mod utils;

pub use cli::{choose_mode, collect_urls, run_cli, run_session, EXIT_PROMPT};
pub use self::core::{classify_url_input, parse_mode_choice};
pub use types::{Collected, ModeChoice, SessionArgs, SessionEnd, UrlInput};
pub use utils::{prepare_output_dir, seed_queue};
