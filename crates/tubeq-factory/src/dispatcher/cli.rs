use super::core::process_batch;
use super::types::{BatchOutcome, BatchStatus, DownloadEngine, FetchStatus};
use crate::terminal::Prompt;
use anyhow::Result;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tubeq_core::{DownloadQueue, Mode, Tone};

/// Downloads the whole queue for `mode`, rendering progress on `prompt`.
///
/// Returns `false` when an item failed; the user has already acknowledged the
/// error by then.
pub fn run_cli<P, E>(
    prompt: &mut P,
    engine: &mut E,
    mode: Mode,
    output_dir: &Path,
    queue: &mut DownloadQueue,
) -> Result<bool>
where
    P: Prompt + ?Sized,
    E: DownloadEngine + ?Sized,
{
    let options = mode.options(output_dir);

    let headline = match mode {
        Mode::Full => "\nDownloading as MP4...\n",
        Mode::Audio => "\nDownloading and Converting to MP3...\n",
    };
    prompt.say(Tone::Heading, headline);

    let mut bar: Option<ProgressBar> = None;
    let mut saved: Option<PathBuf> = None;

    let outcome = process_batch(engine, &options, queue, |status| match status {
        BatchStatus::Working { index, total, url } => {
            prompt.say(
                Tone::Heading,
                &format!("\nWorking on item {} of {}...\n", index, total),
            );
            let pb = prompt.progress_bar();
            pb.set_message(url.to_string());
            bar = Some(pb);
        }
        BatchStatus::Fetch(FetchStatus::Starting) => {}
        BatchStatus::Fetch(FetchStatus::Downloading(pct)) => {
            if let Some(pb) = &bar {
                pb.set_position((pct * 100.0) as u64);
            }
        }
        BatchStatus::Fetch(FetchStatus::PostProcessing) => {
            if let Some(pb) = &bar {
                pb.set_message("Post-processing...");
            }
        }
        BatchStatus::Fetch(FetchStatus::Saved(path)) => saved = Some(path),
        BatchStatus::Done { .. } => {
            if let Some(pb) = bar.take() {
                pb.finish_and_clear();
            }
            prompt.say(Tone::Success, "Download completed successfully.");
            if let Some(path) = saved.take() {
                prompt.say(Tone::Info, &format!("Saved to {}", path.display()));
            }
        }
    });

    match outcome {
        BatchOutcome::Completed { .. } => Ok(true),
        BatchOutcome::Failed {
            position,
            url,
            error,
        } => {
            if let Some(pb) = bar.take() {
                pb.abandon();
            }
            prompt.say(
                Tone::Error,
                &format!("An error occurred on item {} ({}): {}", position, url, error),
            );
            if queue.len() > 1 {
                prompt.say(
                    Tone::Info,
                    &format!("{} item(s) after it were not attempted.", queue.len() - 1),
                );
            }
            prompt.acknowledge("Press Enter to continue and view the error...")?;
            Ok(false)
        }
    }
}
