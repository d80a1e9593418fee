use crate::models::submission::{DEFAULT_WEEKLY_HOURS, MAX_WEEKLY_HOURS, MIN_WEEKLY_HOURS};
use clap::{Parser, Subcommand};

/// Command-line interface definition for the CoffeeConnect landing core:
/// launch countdown, signup capture and FAQ search
#[derive(Parser)]
#[command(
    name = "coffeeconnect",
    version = env!("CARGO_PKG_VERSION"),
    about = "CoffeeConnect Madrid landing core: launch countdown, signup capture with local fallback, FAQ search",
    long_about = None
)]
pub struct Cli {
    /// Override the submissions fallback directory (useful for tests or scripting)
    #[arg(global = true, long = "fallback-dir")]
    pub fallback_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the submissions fallback directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file for missing or unknown fields"
        )]
        check: bool,
    },

    /// Show the countdown to the public launch
    Countdown {
        /// Evaluate the countdown at this instant instead of now
        #[arg(
            long = "at",
            value_name = "WHEN",
            help = "Instant to evaluate (RFC 3339, or naive YYYY-MM-DDTHH:MM[:SS])"
        )]
        at: Option<String>,

        #[arg(long = "short", help = "Single-line clock format")]
        short: bool,

        #[arg(long = "json", help = "Machine-readable output")]
        json: bool,
    },

    /// Join the early-access list
    Signup {
        #[arg(long = "name", help = "Full name")]
        name: String,

        #[arg(long = "email", help = "Email address")]
        email: String,

        #[arg(
            long = "role",
            help = "Role: student, professional, nomad, tourist, other"
        )]
        role: Option<String>,

        #[arg(
            long = "intent",
            value_delimiter = ',',
            help = "What you are looking for: friends, networking, language, cafes (comma separated)"
        )]
        intent: Vec<String>,

        #[arg(
            long = "area",
            help = "Preferred area: centro, chamberi, malasana, salamanca, lavapies, retiro, anywhere"
        )]
        area: Option<String>,
    },

    /// Express interest in joining the founding crew
    Crew {
        #[arg(long = "name", help = "Full name")]
        name: String,

        #[arg(long = "email", help = "Email address")]
        email: String,

        #[arg(
            long = "skills",
            value_delimiter = ',',
            help = "Skill areas: uiux, react, web, backend, events, design, growth (comma separated)"
        )]
        skills: Vec<String>,

        #[arg(
            long = "hours",
            default_value_t = DEFAULT_WEEKLY_HOURS,
            value_parser = clap::value_parser!(u8).range(MIN_WEEKLY_HOURS as i64..=MAX_WEEKLY_HOURS as i64),
            help = "Weekly availability in hours"
        )]
        hours: u8,
    },

    /// Search the FAQ
    Faq {
        /// Keyword to match against questions and answers (case-insensitive)
        query: Option<String>,

        #[arg(long = "json", help = "Emit matching entries as JSON")]
        json: bool,
    },
}
