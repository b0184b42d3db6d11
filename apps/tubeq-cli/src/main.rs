use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tubeq_core::Mode;
use tubeq_factory::session;

#[derive(Parser)]
#[command(name = "tubeq")]
#[command(version)]
#[command(about = "Queue up video URLs and download them with yt-dlp")]
struct Cli {
    /// Download folder
    #[arg(short, long, env = "TUBEQ_OUTPUT", default_value = "yt-downloads")]
    output: PathBuf,

    /// yt-dlp executable to run
    #[arg(long = "yt-dlp", env = "TUBEQ_YTDLP", default_value = "yt-dlp")]
    ytdlp: PathBuf,

    /// Skip the mode question
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// More log output on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// URLs to start the queue with
    urls: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Full,
    Audio,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Full => Mode::Full,
            ModeArg::Audio => Mode::Audio,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = session::SessionArgs {
        output_dir: cli.output,
        ytdlp: cli.ytdlp,
        mode: cli.mode.map(Mode::from),
        urls: cli.urls,
    };
    if let Err(e) = session::run_cli(args) {
        error!(error = %format!("{:#}", e), "session aborted");
        eprintln!("❌ Error: {:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["tubeq"]).unwrap();
        assert_eq!(cli.ytdlp, PathBuf::from("yt-dlp"));
        assert!(cli.mode.is_none());
        assert!(cli.urls.is_empty());
    }

    #[test]
    fn flags_and_urls() {
        let cli = Cli::try_parse_from([
            "tubeq",
            "-o",
            "music",
            "--mode",
            "audio",
            "-vv",
            "https://a",
            "https://b",
        ])
        .unwrap();
        assert_eq!(cli.output, PathBuf::from("music"));
        assert_eq!(cli.mode.map(Mode::from), Some(Mode::Audio));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.urls, vec!["https://a", "https://b"]);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tubeq", "--mode", "video"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
