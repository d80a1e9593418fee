use crate::cli::commands::report_outcome;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::countdown;
use crate::errors::{AppError, AppResult};
use crate::models::{Collection, CrewInterest, Skill};
use crate::store::SubmissionRecorder;
use crate::ui::messages;
use crate::utils::time::row_timestamp;

/// Record interest in joining the founding crew.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Crew {
        name,
        email,
        skills,
        hours,
    } = cmd
    {
        //
        // 1. Contact fields plus at least one skill area
        //
        if name.trim().is_empty() || email.trim().is_empty() || skills.is_empty() {
            messages::warning("Please provide your name, email, and at least one skill area.");
            return Ok(());
        }

        //
        // 2. Parse skill codes
        //
        let mut parsed_skills = Vec::new();
        for code in skills {
            let parsed = Skill::from_code(code).ok_or_else(|| {
                AppError::InvalidSkill(format!(
                    "'{}'. Use one of: uiux, react, web, backend, events, design, growth",
                    code
                ))
            })?;
            parsed_skills.push(parsed);
        }

        //
        // 3. Build the row, stamped with Madrid time
        //
        let interest = CrewInterest {
            name: name.clone(),
            email: email.clone(),
            skills: parsed_skills,
            hours: *hours,
        };
        let row = interest.to_row(&row_timestamp(&countdown::now_madrid()));

        //
        // 4. Record: remote first when configured, local CSV otherwise
        //
        let recorder = SubmissionRecorder::new(cfg);
        let outcome = recorder.record(
            Collection::CrewInterest.title(),
            &row,
            Collection::CrewInterest.header(),
        );

        return report_outcome(outcome, "🎯 Thanks for your interest! We'll be in touch soon.");
    }

    Ok(())
}
