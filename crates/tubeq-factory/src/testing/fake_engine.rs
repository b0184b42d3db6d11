use crate::dispatcher::{DownloadEngine, EngineError, FetchStatus};
use std::collections::HashMap;
use tubeq_core::DownloadOptions;

/// Records every fetch. Calls listed in `failures` (0-based) fail with the
/// given message, everything else succeeds.
#[derive(Debug, Default)]
pub struct FakeEngine {
    pub calls: Vec<(String, DownloadOptions)>,
    failures: HashMap<usize, String>,
}

impl FakeEngine {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize, message: impl Into<String>) -> Self {
        let mut engine = Self::default();
        engine.failures.insert(call, message.into());
        engine
    }

    pub fn urls(&self) -> Vec<&str> {
        self.calls.iter().map(|(url, _)| url.as_str()).collect()
    }
}

impl DownloadEngine for FakeEngine {
    fn fetch(
        &mut self,
        url: &str,
        options: &DownloadOptions,
        on_status: &mut dyn FnMut(FetchStatus),
    ) -> Result<(), EngineError> {
        let call = self.calls.len();
        self.calls.push((url.to_string(), options.clone()));

        on_status(FetchStatus::Starting);
        if let Some(message) = self.failures.get(&call) {
            return Err(EngineError::Failed {
                status: Some(1),
                message: message.clone(),
            });
        }
        on_status(FetchStatus::Downloading(0.5));
        on_status(FetchStatus::Downloading(1.0));
        Ok(())
    }
}
