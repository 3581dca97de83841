use chia_tx_types::Conditions;
use clvmr::NodePtr;

use crate::{DriverError, SpendContext};

/// A puzzle that a coin can be locked by, and the way conditions are passed to it.
pub trait Layer {
    /// Constructs the full curried puzzle for this layer.
    /// Ideally, the puzzle itself should be cached in the [`SpendContext`].
    fn construct_puzzle(&self, ctx: &mut SpendContext) -> Result<NodePtr, DriverError>;

    /// Wraps a condition list in the solution shape the puzzle expects.
    fn construct_solution(
        &self,
        ctx: &mut SpendContext,
        conditions: Conditions,
    ) -> Result<NodePtr, DriverError>;
}
