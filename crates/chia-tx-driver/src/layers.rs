mod p2_delegated_conditions_layer;
mod raw_puzzle_layer;
mod standard_layer;

pub use p2_delegated_conditions_layer::*;
pub use raw_puzzle_layer::*;
pub use standard_layer::*;
