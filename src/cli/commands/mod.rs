pub mod config;
pub mod countdown;
pub mod crew;
pub mod faq;
pub mod init;
pub mod signup;

use crate::errors::{AppError, AppResult};
use crate::store::RecordOutcome;
use crate::ui::messages;

/// Shared tail of the signup and crew flows: turn a record outcome into
/// user feedback, keeping only the fully failed case as a hard error.
pub(crate) fn report_outcome(outcome: RecordOutcome, accepted: &str) -> AppResult<()> {
    match outcome {
        RecordOutcome::RemoteOk => {
            messages::success(accepted);
            Ok(())
        }
        RecordOutcome::LocalOk { file, remote_error } => {
            if let Some(err) = remote_error {
                messages::warning(format!("Remote store failed ({err}). Saving locally..."));
            }
            messages::success(accepted);
            messages::info(format!(
                "Data saved locally to {:?}. Remote store unavailable.",
                file
            ));
            Ok(())
        }
        RecordOutcome::Failed { reason } => Err(AppError::Record(reason)),
    }
}
