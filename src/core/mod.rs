pub mod assistant;
pub mod prompt;
