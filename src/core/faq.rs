//! The landing-page FAQ: fixed entries plus the keyword filter behind the
//! search box.

use serde::Serialize;

/// One question/answer pair, exactly as shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn entry(question: &'static str, answer: &'static str) -> FaqEntry {
    FaqEntry { question, answer }
}

/// The published FAQ, in display order.
pub const FAQS: [FaqEntry; 21] = [
    entry(
        "Is this a dating app?",
        "No — CoffeeConnect is designed for friendly, professional, and social connections over coffee, not romantic dating.",
    ),
    entry(
        "How do the meetups work?",
        "Complete a short questionnaire → get matched by interests and preferences → confirm your attendance → meet at a partner café.",
    ),
    entry(
        "What does the event fee cover?",
        "Platform maintenance, coordination costs, café partnerships, and keeping no-shows to a minimum.",
    ),
    entry(
        "How big are the groups?",
        "We keep groups intimate — typically 3–5 people for better conversations.",
    ),
    entry(
        "Who can participate?",
        "Students, young professionals, digital nomads, tourists — anyone in Madrid looking for genuine connections.",
    ),
    entry(
        "Where do events happen?",
        "At carefully selected partner cafés across Madrid's best neighborhoods.",
    ),
    entry(
        "Can I choose my preferred area and time?",
        "Absolutely! You can specify your preferences in the questionnaire.",
    ),
    entry(
        "How does the matching algorithm work?",
        "We consider your interests, preferred location, available times, and group dynamics for optimal matches.",
    ),
    entry(
        "What if events are full?",
        "You'll be added to a waitlist and notified if spots become available.",
    ),
    entry(
        "What languages are supported?",
        "Primarily English and Spanish, with options for language exchange groups.",
    ),
    entry(
        "What's the cancellation policy?",
        "Full refund if you cancel at least 24 hours before the event.",
    ),
    entry(
        "What happens if someone doesn't show up?",
        "Repeated no-shows may result in suspended access to maintain group integrity.",
    ),
    entry(
        "Is it safe?",
        "Yes — we meet in public cafés, verify all RSVPs, and maintain small group sizes for comfort and security.",
    ),
    entry(
        "Do you accommodate accessibility needs?",
        "We prioritize accessible venues when accessibility requirements are noted during registration.",
    ),
    entry(
        "Do I have to buy something at the café?",
        "We encourage supporting our café partners with at least one purchase, but it's not mandatory.",
    ),
    entry(
        "Can I bring a friend?",
        "Friends are welcome, but each person must register separately to ensure proper matching.",
    ),
    entry(
        "How often are meetups held?",
        "We're starting with weekly events and will scale based on community demand.",
    ),
    entry(
        "How can cafés partner with you?",
        "Café owners can reach out through our crew interest form or contact us directly.",
    ),
    entry(
        "Is my personal data secure?",
        "Absolutely. We never sell your data and follow strict privacy guidelines.",
    ),
    entry(
        "How do payments work?",
        "Simple, secure payments through Stripe during our MVP phase.",
    ),
    entry(
        "What if I don't get matched for an event?",
        "You'll automatically be considered for the next suitable event that matches your preferences.",
    ),
];

/// Entries matching `query`, lazily and in display order.
///
/// An empty (or all-whitespace) query matches everything; otherwise the match
/// is a case-insensitive substring test against both question and answer. A
/// pure function of its inputs, so the iterator can be rebuilt freely.
pub fn filter_entries<'a>(
    query: &str,
    entries: &'a [FaqEntry],
) -> impl Iterator<Item = &'a FaqEntry> {
    let needle = query.trim().to_lowercase();
    entries.iter().filter(move |e| {
        needle.is_empty()
            || e.question.to_lowercase().contains(&needle)
            || e.answer.to_lowercase().contains(&needle)
    })
}
