#![cfg(unix)]

use pretty_assertions::assert_eq;
use std::{fs, os::unix::fs::PermissionsExt, path::{Path, PathBuf}};
use tubeq_factory::dispatcher::{DownloadEngine, EngineError, FetchStatus, YtDlpEngine};
use tubeq_factory::Mode;

fn fake_ytdlp(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("yt-dlp");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn reports_progress_and_saved_file() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = fake_ytdlp(
        tmp.path(),
        r#"echo "[youtube] abc: Downloading webpage"
echo "[download]  50.0% of 1.00MiB"
echo "[download] 100% of 1.00MiB"
echo "[postprocess] abc"
echo "[saved] /downloads/Someone/Title.mp3""#,
    );
    let mut engine = YtDlpEngine::new(bin);
    let options = Mode::Audio.options(tmp.path());
    let mut seen = Vec::new();

    engine
        .fetch("https://youtu.be/abc", &options, &mut |s| seen.push(s))
        .unwrap();

    assert_eq!(
        seen,
        vec![
            FetchStatus::Starting,
            FetchStatus::Downloading(0.5),
            FetchStatus::Downloading(1.0),
            FetchStatus::PostProcessing,
            FetchStatus::Saved(PathBuf::from("/downloads/Someone/Title.mp3")),
        ]
    );
}

#[test]
fn passes_url_last() {
    let tmp = tempfile::tempdir().unwrap();
    let log = tmp.path().join("args.txt");
    let bin = fake_ytdlp(
        tmp.path(),
        &format!(r#"printf '%s\n' "$@" > "{}""#, log.display()),
    );
    let mut engine = YtDlpEngine::new(bin);
    let options = Mode::Audio.options(tmp.path());

    engine
        .fetch("https://youtu.be/abc", &options, &mut |_| {})
        .unwrap();

    let args = fs::read_to_string(&log).unwrap();
    let args: Vec<&str> = args.lines().collect();
    assert_eq!(args.first().copied(), Some("-f"));
    assert_eq!(args.get(1).copied(), Some("bestaudio/best"));
    assert!(args.contains(&"--extract-audio"));
    assert_eq!(args.last().copied(), Some("https://youtu.be/abc"));
}

#[test]
fn non_zero_exit_carries_the_error_line() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = fake_ytdlp(
        tmp.path(),
        r#"echo "WARNING: ignore me" >&2
echo "ERROR: [youtube] abc: Video unavailable" >&2
exit 1"#,
    );
    let mut engine = YtDlpEngine::new(bin);
    let options = Mode::Full.options(tmp.path());

    let err = engine
        .fetch("https://youtu.be/abc", &options, &mut |_| {})
        .unwrap_err();

    match err {
        EngineError::Failed { status, message } => {
            assert_eq!(status, Some(1));
            assert_eq!(message, "ERROR: [youtube] abc: Video unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_binary_is_a_spawn_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut engine = YtDlpEngine::new(tmp.path().join("does-not-exist"));
    let options = Mode::Full.options(tmp.path());

    let err = engine
        .fetch("https://youtu.be/abc", &options, &mut |_| {})
        .unwrap_err();

    assert!(matches!(err, EngineError::Spawn { .. }));
}
