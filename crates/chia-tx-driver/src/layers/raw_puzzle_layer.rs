use chia_protocol::Program;
use chia_tx_types::Conditions;
use clvmr::NodePtr;

use crate::{DriverError, Layer, SpendContext};

/// A [`Layer`] for a puzzle that is already known in full, rather than derived from a key.
///
/// The conditions are passed as the solution itself, which is the delegated puzzle convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPuzzleLayer {
    pub puzzle: Program,
}

impl RawPuzzleLayer {
    pub fn new(puzzle: Program) -> Self {
        Self { puzzle }
    }
}

impl Layer for RawPuzzleLayer {
    fn construct_puzzle(&self, ctx: &mut SpendContext) -> Result<NodePtr, DriverError> {
        ctx.alloc(&self.puzzle)
    }

    fn construct_solution(
        &self,
        ctx: &mut SpendContext,
        conditions: Conditions,
    ) -> Result<NodePtr, DriverError> {
        ctx.alloc(&conditions)
    }
}
