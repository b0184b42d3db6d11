use super::core::{classify_url_input, parse_mode_choice};
use super::types::{Collected, ModeChoice, SessionArgs, SessionEnd, UrlInput};
use super::utils::{prepare_output_dir, seed_queue};
use crate::dispatcher::{self, check_dependencies, DownloadEngine, YtDlpEngine};
use crate::terminal::{ConsolePrompt, Prompt, BANNER, DONE_BANNER};
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};
use tubeq_core::{DownloadQueue, Mode, Tone};

const MODE_PROMPT: &str =
    "Do you want to download the (F)ull video, just the (A)udio, or (Q)uit? (f/a/q)";
const URL_PROMPT: &str = "Enter the video URL (BLANK to continue or type 'q' to quit)";
pub const EXIT_PROMPT: &str = "Press Enter to exit...";

pub fn run_cli(args: SessionArgs) -> Result<()> {
    check_dependencies(&args.ytdlp)?;
    let output_dir = prepare_output_dir(&args.output_dir)?;
    info!(output_dir = %output_dir.display(), "download folder ready");

    let mut prompt = ConsolePrompt::new();
    let mut engine = YtDlpEngine::new(&args.ytdlp);

    let end = run_session(&mut prompt, &mut engine, &output_dir, args.mode, &args.urls)?;
    debug!(?end, "session finished");
    Ok(())
}

/// The whole interactive flow: pick a mode, collect URLs, download them.
pub fn run_session<P, E>(
    prompt: &mut P,
    engine: &mut E,
    output_dir: &Path,
    preset_mode: Option<Mode>,
    seed: &[String],
) -> Result<SessionEnd>
where
    P: Prompt + ?Sized,
    E: DownloadEngine + ?Sized,
{
    let end = drive(prompt, engine, output_dir, preset_mode, seed)?;
    if end.needs_acknowledgement() {
        prompt.acknowledge(EXIT_PROMPT)?;
    }
    prompt.say(Tone::Heading, "\n\nExiting...");
    Ok(end)
}

fn drive<P, E>(
    prompt: &mut P,
    engine: &mut E,
    output_dir: &Path,
    preset_mode: Option<Mode>,
    seed: &[String],
) -> Result<SessionEnd>
where
    P: Prompt + ?Sized,
    E: DownloadEngine + ?Sized,
{
    let mode = match preset_mode {
        Some(mode) => mode,
        None => match choose_mode(prompt)? {
            Some(mode) => mode,
            None => return Ok(SessionEnd::ModeDeclined),
        },
    };

    let (queue, skipped) = seed_queue(seed);
    let notice = (!skipped.is_empty()).then(|| {
        format!(
            "Skipped {} entry(ies) that don't look like URLs: {}",
            skipped.len(),
            skipped.join(", ")
        )
    });

    let mut queue = match collect_urls(prompt, mode, queue, notice)? {
        Collected::Ready(queue) => queue,
        Collected::Quit => return Ok(SessionEnd::Quit),
        Collected::Empty => {
            prompt.say(Tone::Info, "No Items added to list, exiting...");
            return Ok(SessionEnd::NothingQueued);
        }
    };

    let count = queue.len();
    prompt.say(
        Tone::Heading,
        &format!("Starting download of {} item(s)....", count),
    );

    if dispatcher::run_cli(prompt, engine, mode, output_dir, &mut queue)? {
        prompt.say(Tone::Banner, DONE_BANNER);
        Ok(SessionEnd::Downloaded { count })
    } else {
        prompt.say(Tone::Warning, "Looks like there was an error.... ");
        Ok(SessionEnd::Failed {
            remaining: queue.len(),
        })
    }
}

/// Asks for a mode until the answer is usable. `None` means the user quit.
pub fn choose_mode<P: Prompt + ?Sized>(prompt: &mut P) -> Result<Option<Mode>> {
    prompt.clear();
    prompt.say(Tone::Banner, BANNER);

    loop {
        let answer = prompt.read_line(MODE_PROMPT)?;
        match parse_mode_choice(&answer) {
            ModeChoice::Pick(mode) => return Ok(Some(mode)),
            ModeChoice::Quit => return Ok(None),
            ModeChoice::Invalid(choice) => prompt.say(
                Tone::Warning,
                &format!(
                    "Invalid choice \"{}\", must be either \"f, a, or q\"... try again... ",
                    choice
                ),
            ),
        }
    }
}

/// Keeps asking for URLs, redrawing the queue each round, until a blank line
/// or `q`.
pub fn collect_urls<P: Prompt + ?Sized>(
    prompt: &mut P,
    mode: Mode,
    mut queue: DownloadQueue,
    mut notice: Option<String>,
) -> Result<Collected> {
    loop {
        render(prompt, mode, &queue, notice.take().as_deref());

        let answer = prompt.read_line(URL_PROMPT)?;
        match classify_url_input(&answer) {
            UrlInput::Quit => return Ok(Collected::Quit),
            UrlInput::Url(url) => {
                debug!(%url, "queued");
                queue.push(url);
            }
            UrlInput::Blank if queue.is_empty() => return Ok(Collected::Empty),
            UrlInput::Blank => return Ok(Collected::Ready(queue)),
            UrlInput::Invalid(_) => {
                notice = Some("Doesn't look like thats a url... try again... ".to_string())
            }
        }
    }
}

fn render<P: Prompt + ?Sized>(
    prompt: &mut P,
    mode: Mode,
    queue: &DownloadQueue,
    notice: Option<&str>,
) {
    prompt.clear();
    prompt.say(Tone::Banner, BANNER);
    prompt.say(Tone::Info, &format!("Download mode set to {}.", mode));

    if !queue.is_empty() {
        prompt.say(Tone::Heading, "Current Queue:");
        for url in queue.iter() {
            prompt.say(Tone::Item, &format!("\t- {}", url));
        }
    }

    if let Some(notice) = notice {
        prompt.say(Tone::Warning, notice);
    }
}
