use crate::cli::parser::Commands;
use crate::core::countdown::{self, Instant};
use crate::errors::{AppError, AppResult};
use crate::models::Breakdown;
use crate::ui::messages;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::formatting::countdown2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{instant_label, parse_instant, row_timestamp};
use ansi_term::{Colour, Style};
use serde::Serialize;

/// Shape of `countdown --json`, consumed by the landing page.
#[derive(Serialize)]
struct CountdownView {
    launch: String,
    now: String,
    live: bool,
    total_seconds: i64,
    display: String,
    #[serde(flatten)]
    breakdown: Breakdown,
}

/// Show the time left until the public launch.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Countdown { at, short, json } = cmd {
        //
        // 1. Resolve "now": --at override or the Madrid wall clock
        //
        let now = match at {
            Some(s) => parse_instant(s).ok_or_else(|| AppError::InvalidWhen(s.to_string()))?,
            None => Instant::Zoned(countdown::now_madrid()),
        };

        //
        // 2. Clamped distance to launch, split into display units
        //
        let launch = countdown::launch_time();
        let delta = countdown::remaining(now, Instant::Zoned(launch));
        let b = countdown::breakdown(delta);

        //
        // 3. Machine-readable output
        //
        if *json {
            let view = CountdownView {
                launch: row_timestamp(&launch),
                now: instant_label(&now),
                live: b.is_zero(),
                total_seconds: b.total_seconds(),
                display: countdown2readable(&b, true),
                breakdown: b,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        //
        // 4. Human-readable output
        //
        if *short {
            println!(
                "Countdown to launch (Madrid): {}",
                countdown2readable(&b, false)
            );
        } else {
            messages::header("⏳ Countdown to Launch");

            let mut table = Table::new(vec![
                Column {
                    header: "Days".to_string(),
                    min_width: 7,
                },
                Column {
                    header: "Hours".to_string(),
                    min_width: 7,
                },
                Column {
                    header: "Minutes".to_string(),
                    min_width: 7,
                },
                Column {
                    header: "Seconds".to_string(),
                    min_width: 7,
                },
            ]);

            let style = if b.is_zero() {
                Colour::Green.bold()
            } else {
                Style::new().bold()
            };
            table.add_row(vec![
                style.paint(format!("{:02}", b.days)).to_string(),
                style.paint(format!("{:02}", b.hours)).to_string(),
                style.paint(format!("{:02}", b.minutes)).to_string(),
                style.paint(format!("{:02}", b.seconds)).to_string(),
            ]);
            print!("{}", table.render());

            println!("{}🚀 Launch: {} (Madrid){}", CYAN, row_timestamp(&launch), RESET);
            if at.is_some() {
                messages::hint(format!("Evaluated at {}", instant_label(&now)));
            }
        }

        //
        // 5. Live banner once the clock hits zero
        //
        if b.is_zero() {
            messages::success("🎉 We're live! Time to grab coffee with someone new ☕");
        }
    }

    Ok(())
}
