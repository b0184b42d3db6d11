use super::types::FetchStatus;
use anyhow::{Context, Result};
use std::{
    ffi::OsString,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};
use tubeq_core::{DownloadOptions, PostProcessor};

/// Prefix of the line yt-dlp prints once the final file is in place.
pub const SAVED_MARKER: &str = "[saved] ";
/// Printed right before post-processors (audio extraction) run. `--print`
/// lines reach stdout even though `--print` silences yt-dlp's own status lines.
pub const POSTPROCESS_MARKER: &str = "[postprocess] ";

pub fn check_dependencies(ytdlp: &Path) -> Result<()> {
    which::which(ytdlp)
        .with_context(|| format!("'{}' not found in PATH.", ytdlp.display()))?;
    which::which("ffmpeg").context("'ffmpeg' not found in PATH.")?;
    Ok(())
}

pub fn build_ytdlp_args(url: &str, options: &DownloadOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-f".into(),
        options.format.clone().into(),
        "-o".into(),
        options.output_template.clone().into_os_string(),
        "--newline".into(), // one progress update per line
        "--progress".into(),
        "--no-warnings".into(),
        "--print".into(),
        format!("post_process:{POSTPROCESS_MARKER}%(id)s").into(),
        "--print".into(),
        format!("after_move:{SAVED_MARKER}%(filepath)s").into(),
    ];

    if let Some(PostProcessor::ExtractAudio { codec, quality }) = &options.post_processor {
        args.extend([
            "--extract-audio".into(),
            "--audio-format".into(),
            codec.clone().into(),
            "--audio-quality".into(),
            quality.clone().into(),
        ]);
    }

    args.push(url.into());
    args
}

/// Maps one line of yt-dlp stdout to a status update, if it carries one.
pub fn parse_output_line(line: &str) -> Option<FetchStatus> {
    if let Some(path) = line.strip_prefix(SAVED_MARKER) {
        let path = path.trim();
        return (!path.is_empty()).then(|| FetchStatus::Saved(PathBuf::from(path)));
    }

    // "[download]  45.0% of 3.20MiB at 1.10MiB/s ETA 00:02"
    if let Some(rest) = line.strip_prefix("[download]") {
        let end = rest.find('%')?;
        let pct: f32 = rest[..end].trim().parse().ok()?;
        return Some(FetchStatus::Downloading((pct / 100.0).clamp(0.0, 1.0)));
    }

    if line.starts_with(POSTPROCESS_MARKER) {
        return Some(FetchStatus::PostProcessing);
    }

    None
}

/// Collects the text of every `ERROR:` line yt-dlp writes to stderr.
pub fn collect_error_lines<R: Read>(reader: R) -> Vec<String> {
    BufReader::new(reader)
        .lines()
        .map_while(|line| line.ok())
        .filter_map(|line| {
            line.trim()
                .strip_prefix("ERROR:")
                .map(|msg| msg.trim().to_string())
        })
        .collect()
}

pub fn failure_message(errors: &[String], status: Option<i32>) -> String {
    match (errors.last(), status) {
        (Some(last), _) => format!("ERROR: {}", last),
        (None, Some(code)) => format!("yt-dlp exited with status {}", code),
        (None, None) => "yt-dlp was terminated by a signal".to_string(),
    }
}
