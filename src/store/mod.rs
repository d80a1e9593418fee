pub mod fallback;
pub mod recorder;
pub mod remote;

pub use recorder::{RecordOutcome, SubmissionRecorder};
pub use remote::{RemoteError, RemoteStore};
