use super::core::classify_url_input;
use super::types::UrlInput;
use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tubeq_core::DownloadQueue;

/// Makes `dir` absolute and creates it (and its parents) if missing.
pub fn prepare_output_dir(dir: &Path) -> Result<PathBuf> {
    let absolute = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()
            .context("Failed to get working directory")?
            .join(dir)
    };
    fs::create_dir_all(&absolute)
        .with_context(|| format!("Failed to create download folder {:?}", absolute))?;
    Ok(absolute)
}

/// Builds the starting queue from URLs given up front. Returns the queue and
/// the entries that were skipped.
pub fn seed_queue(urls: &[String]) -> (DownloadQueue, Vec<String>) {
    let mut queue = DownloadQueue::new();
    let mut skipped = Vec::new();
    for raw in urls {
        match classify_url_input(raw) {
            UrlInput::Url(url) => queue.push(url),
            _ => skipped.push(raw.clone()),
        }
    }
    (queue, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn creates_nested_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b");

        let dir = prepare_output_dir(&target).unwrap();

        assert_eq!(dir, target);
        assert!(dir.is_dir());
    }

    #[test]
    fn existing_dir_is_fine() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = prepare_output_dir(tmp.path()).unwrap();
        assert_eq!(dir, tmp.path());
    }

    #[test]
    fn fails_when_a_file_is_in_the_way() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("taken");
        fs::write(&blocker, b"x").unwrap();

        assert!(prepare_output_dir(&blocker.join("sub")).is_err());
    }

    #[test]
    fn seeding_keeps_valid_urls_in_order() {
        let urls = vec![
            "https://a".to_string(),
            "nope".to_string(),
            " http://b ".to_string(),
            "q".to_string(),
        ];

        let (queue, skipped) = seed_queue(&urls);

        assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["https://a", "http://b"]);
        assert_eq!(skipped, vec!["nope", "q"]);
    }
}
