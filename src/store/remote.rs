//! Seam to the remote tabular store holding the lead-capture workbook.

use thiserror::Error;

/// Failures surfaced by a remote store client.
///
/// `NotFound` drives the lazy-create path in the recorder. Everything else
/// (auth, network, quota, malformed responses) collapses into `Service`,
/// because the recorder treats them all the same way: fall back to disk.
#[derive(Error, Debug)]
pub enum RemoteError {
    // ---------------------------
    // Collection lookup
    // ---------------------------
    #[error("collection '{collection}' not found in workbook")]
    NotFound { collection: String },

    // ---------------------------
    // Everything else
    // ---------------------------
    #[error("remote store error: {0}")]
    Service(String),
}

/// Minimal client surface the recorder needs from a spreadsheet-like
/// service: look a collection up by name, create one sized for a header,
/// append a row. Credentials and workbook wiring stay with the
/// implementation behind this trait. Implementations must be thread-safe
/// so a recorder holding one can move to a worker thread.
pub trait RemoteStore: Send + Sync {
    /// Check that `collection` exists in the workbook.
    fn lookup(&self, collection: &str) -> Result<(), RemoteError>;

    /// Create `collection` with room for `columns` columns.
    fn create(&self, collection: &str, columns: usize) -> Result<(), RemoteError>;

    /// Append one row to `collection`.
    fn append(&self, collection: &str, row: &[String]) -> Result<(), RemoteError>;
}
