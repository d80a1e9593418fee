use crate::cli::parser::Commands;
use crate::core::faq::{FAQS, filter_entries};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::bold;

/// Search the FAQ and print matching entries.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Faq { query, json } = cmd {
        //
        // 1. Filter, preserving page order
        //
        let q = query.as_deref().unwrap_or("");
        let hits: Vec<_> = filter_entries(q, &FAQS).collect();

        //
        // 2. Machine-readable output
        //
        if *json {
            println!("{}", serde_json::to_string_pretty(&hits)?);
            return Ok(());
        }

        //
        // 3. Question/answer blocks, wrapped for the terminal
        //
        messages::header("❓ Frequently Asked Questions");

        for entry in &hits {
            println!("{}", bold(entry.question));
            let wrapped = textwrap::fill(
                entry.answer,
                textwrap::Options::new(78)
                    .initial_indent("   ")
                    .subsequent_indent("   "),
            );
            println!("{}\n", wrapped);
        }

        if hits.is_empty() {
            messages::info("🤔 No results found. Try a different keyword or clear your search.");
        } else {
            messages::hint(format!("{} result(s)", hits.len()));
        }
    }

    Ok(())
}
