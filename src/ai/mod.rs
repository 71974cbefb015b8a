//! Computer move selection. The only policy is a uniform random choice among
//! legal columns.

mod agent;
mod random;

pub use agent::Agent;
pub use random::RandomAgent;
