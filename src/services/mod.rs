pub mod extraction;
pub mod prompt;
pub mod providers;
pub mod recommendations;

pub use recommendations::{recommend, Notice, Outcome, RecommendationReport};
