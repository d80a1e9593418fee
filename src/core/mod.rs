pub mod countdown;
pub mod faq;
