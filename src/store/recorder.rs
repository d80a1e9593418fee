//! Best-effort submission recording: remote store first, local CSV second.

use crate::config::Config;
use crate::store::fallback;
use crate::store::remote::{RemoteError, RemoteStore};
use std::path::PathBuf;

/// How a [`SubmissionRecorder::record`] call ended.
///
/// Remote and local success both mean "submission accepted". Only `Failed`
/// is an error from the visitor's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Row appended to the remote collection.
    RemoteOk,
    /// Row appended to the local fallback file. When the remote store was
    /// attempted and failed, the absorbed error rides along for display.
    LocalOk {
        file: PathBuf,
        remote_error: Option<String>,
    },
    /// The local write failed too, or the row did not match the header.
    Failed { reason: String },
}

/// Records one submission row per call, remote first when a client is
/// wired and enabled, local CSV otherwise. Append-only: no deduplication,
/// no retries, and the same row recorded twice is stored twice.
pub struct SubmissionRecorder {
    store: Option<Box<dyn RemoteStore>>,
    remote_enabled: bool,
    fallback_dir: PathBuf,
}

impl SubmissionRecorder {
    /// Recorder with no remote client wired: every call lands in the local
    /// fallback file.
    pub fn new(cfg: &Config) -> Self {
        Self {
            store: None,
            remote_enabled: cfg.remote_enabled,
            fallback_dir: cfg.fallback_path(),
        }
    }

    /// Recorder with a caller-provided remote client.
    pub fn with_store(cfg: &Config, store: Box<dyn RemoteStore>) -> Self {
        Self {
            store: Some(store),
            remote_enabled: cfg.remote_enabled,
            fallback_dir: cfg.fallback_path(),
        }
    }

    /// Append one row to the named collection.
    ///
    /// One remote attempt, then one local attempt. Never panics: every
    /// failure is folded into the returned outcome.
    pub fn record(&self, collection: &str, row: &[String], header: &[&str]) -> RecordOutcome {
        // 1. A row that does not line up with the header never hits storage
        if row.len() != header.len() {
            return RecordOutcome::Failed {
                reason: format!(
                    "row has {} fields but '{}' expects {} columns",
                    row.len(),
                    collection,
                    header.len()
                ),
            };
        }

        // 2. Remote attempt, absorbed on failure
        let mut remote_error = None;
        if self.remote_enabled
            && let Some(store) = &self.store
        {
            match append_remote(store.as_ref(), collection, row, header) {
                Ok(()) => return RecordOutcome::RemoteOk,
                Err(e) => remote_error = Some(e.to_string()),
            }
        }

        // 3. Local fallback, the only step allowed to fail the whole call
        match fallback::append_row(&self.fallback_dir, collection, row, header) {
            Ok(file) => RecordOutcome::LocalOk { file, remote_error },
            Err(e) => RecordOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// One remote attempt: look the collection up, lazily creating it with its
/// header row, then append the submission row.
fn append_remote(
    store: &dyn RemoteStore,
    collection: &str,
    row: &[String],
    header: &[&str],
) -> Result<(), RemoteError> {
    match store.lookup(collection) {
        Ok(()) => {}
        Err(RemoteError::NotFound { .. }) => {
            store.create(collection, header.len())?;
            let header_row: Vec<String> = header.iter().map(|s| s.to_string()).collect();
            store.append(collection, &header_row)?;
        }
        Err(e) => return Err(e),
    }
    store.append(collection, row)
}
