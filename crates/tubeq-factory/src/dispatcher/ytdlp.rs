use super::types::{DownloadEngine, EngineError, FetchStatus};
use super::utils::{build_ytdlp_args, collect_error_lines, failure_message, parse_output_line};
use std::{
    io::{BufRead, BufReader},
    path::PathBuf,
    process::{Command, Stdio},
    thread,
};
use tracing::debug;
use tubeq_core::DownloadOptions;

/// Runs the `yt-dlp` executable once per URL.
#[derive(Debug, Clone)]
pub struct YtDlpEngine {
    program: PathBuf,
}

impl YtDlpEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl DownloadEngine for YtDlpEngine {
    fn fetch(
        &mut self,
        url: &str,
        options: &DownloadOptions,
        on_status: &mut dyn FnMut(FetchStatus),
    ) -> Result<(), EngineError> {
        on_status(FetchStatus::Starting);

        let args = build_ytdlp_args(url, options);
        debug!(program = %self.program.display(), ?args, "spawning yt-dlp");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: self.program_name(),
                source,
            })?;

        // stderr is drained on the side so a chatty extractor can't block stdout.
        let stderr_reader = child
            .stderr
            .take()
            .map(|stderr| thread::spawn(move || collect_error_lines(stderr)));

        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(source) => {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(EngineError::Io {
                            program: self.program_name(),
                            source,
                        });
                    }
                };
                if let Some(status) = parse_output_line(&line) {
                    on_status(status);
                }
            }
        }

        let status = child.wait().map_err(|source| EngineError::Io {
            program: self.program_name(),
            source,
        })?;
        let errors = stderr_reader
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();

        if status.success() {
            debug!(%url, "yt-dlp finished");
            Ok(())
        } else {
            Err(EngineError::Failed {
                status: status.code(),
                message: failure_message(&errors, status.code()),
            })
        }
    }
}
