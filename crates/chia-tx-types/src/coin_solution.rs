use chia_protocol::{Coin, Program};
use chia_streamable_macro::streamable;

/// A coin paired with the program that spends it.
///
/// The program is the two element list `(puzzle solution)`, so the puzzle reveal and its
/// solution travel together as a single serialized CLVM value.
#[streamable]
pub struct CoinSolution {
    pub coin: Coin,
    pub puzzle_and_solution: Program,
}
