mod coin_solution;
mod condition;
mod conditions;
mod puzzle_mod;
mod puzzles;
mod run_puzzle;
mod spend_bundle;
mod spend_request;

pub use coin_solution::*;
pub use condition::*;
pub use conditions::*;
pub use puzzle_mod::*;
pub use puzzles::*;
pub use run_puzzle::*;
pub use spend_bundle::*;
pub use spend_request::*;
