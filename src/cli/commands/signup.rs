use crate::cli::commands::report_outcome;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::countdown;
use crate::errors::{AppError, AppResult};
use crate::models::{Area, Collection, Intent, Role, Signup};
use crate::store::SubmissionRecorder;
use crate::ui::messages;
use crate::utils::time::row_timestamp;

/// Record an early-access signup.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Signup {
        name,
        email,
        role,
        intent,
        area,
    } = cmd
    {
        //
        // 1. Both contact fields must carry content
        //
        if name.trim().is_empty() || email.trim().is_empty() {
            messages::warning("Please provide both your name and email address.");
            return Ok(());
        }

        //
        // 2. Parse role (optional)
        //
        let role = match role {
            Some(code) => Some(Role::from_code(code).ok_or_else(|| {
                AppError::InvalidRole(format!(
                    "'{}'. Use one of: student, professional, nomad, tourist, other",
                    code
                ))
            })?),
            None => None,
        };

        //
        // 3. Parse intents (zero or more)
        //
        let mut intents = Vec::new();
        for code in intent {
            let parsed = Intent::from_code(code).ok_or_else(|| {
                AppError::InvalidIntent(format!(
                    "'{}'. Use one of: friends, networking, language, cafes",
                    code
                ))
            })?;
            intents.push(parsed);
        }

        //
        // 4. Parse area (optional)
        //
        let area = match area {
            Some(code) => Some(Area::from_code(code).ok_or_else(|| {
                AppError::InvalidArea(format!(
                    "'{}'. Use one of: centro, chamberi, malasana, salamanca, lavapies, retiro, anywhere",
                    code
                ))
            })?),
            None => None,
        };

        //
        // 5. Build the row, stamped with Madrid time
        //
        let signup = Signup {
            name: name.clone(),
            email: email.clone(),
            role,
            intent: intents,
            area,
        };
        let row = signup.to_row(&row_timestamp(&countdown::now_madrid()));

        //
        // 6. Record: remote first when configured, local CSV otherwise
        //
        let recorder = SubmissionRecorder::new(cfg);
        let outcome = recorder.record(
            Collection::Signups.title(),
            &row,
            Collection::Signups.header(),
        );

        return report_outcome(outcome, "✨ Welcome aboard! We'll email you when we launch.");
    }

    Ok(())
}
