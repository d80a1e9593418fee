pub mod breakdown;
pub mod submission;

pub use breakdown::Breakdown;
pub use submission::{Area, Collection, CrewInterest, Intent, Role, Signup, Skill};
