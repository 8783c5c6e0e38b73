//! Move selection for the Computer side: the minimax search engine, its
//! heuristic evaluator, difficulty tiers, and a random baseline agent.

mod agent;
mod difficulty;
mod minimax;
mod random;

pub use agent::Agent;
pub use difficulty::Difficulty;
pub use minimax::{Heuristic, SearchEngine, WindowHeuristic};
pub use random::RandomAgent;
