use super::types::{BatchOutcome, BatchStatus, DownloadEngine};
use tracing::{info, warn};
use tubeq_core::{DownloadOptions, DownloadQueue};

/// Feeds the queue to `engine` one URL at a time, in order.
///
/// Stops at the first failure: finished items are dropped from the front of
/// the queue, the failed one and everything after it stay. A fully successful
/// run leaves the queue empty.
pub fn process_batch<E, F>(
    engine: &mut E,
    options: &DownloadOptions,
    queue: &mut DownloadQueue,
    mut callback: F,
) -> BatchOutcome
where
    E: DownloadEngine + ?Sized,
    F: FnMut(BatchStatus<'_>),
{
    let total = queue.len();
    info!(total, format = %options.format, "starting batch");

    for index in 0..total {
        let Some(url) = queue.get(index).map(str::to_owned) else {
            break;
        };

        callback(BatchStatus::Working {
            index: index + 1,
            total,
            url: &url,
        });

        let result = engine.fetch(&url, options, &mut |status| {
            callback(BatchStatus::Fetch(status))
        });

        match result {
            Ok(()) => callback(BatchStatus::Done {
                index: index + 1,
                total,
            }),
            Err(error) => {
                warn!(%url, %error, position = index + 1, "download failed, aborting batch");
                queue.drain_front(index);
                return BatchOutcome::Failed {
                    position: index + 1,
                    url,
                    error,
                };
            }
        }
    }

    queue.clear();
    info!(downloaded = total, "batch complete");
    BatchOutcome::Completed { downloaded: total }
}
