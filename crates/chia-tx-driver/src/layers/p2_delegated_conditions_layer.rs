use chia_bls::PublicKey;
use chia_tx_types::{Conditions, Mod, P2DelegatedConditionsArgs};
use clvm_traits::clvm_list;
use clvm_utils::{ToTreeHash, TreeHash};
use clvmr::NodePtr;

use crate::{DriverError, Layer, SpendContext};

/// The p2 delegated conditions [`Layer`] allows a certain key to spend the coin.
/// To do so, a list of additional conditions is signed and passed in the solution.
/// Typically, the [`StandardLayer`](crate::StandardLayer) is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P2DelegatedConditionsLayer {
    /// The public key that has the ability to spend the coin.
    pub public_key: PublicKey,
}

impl P2DelegatedConditionsLayer {
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }
}

impl Layer for P2DelegatedConditionsLayer {
    fn construct_puzzle(&self, ctx: &mut SpendContext) -> Result<NodePtr, DriverError> {
        ctx.curry(P2DelegatedConditionsArgs::new(self.public_key))
    }

    fn construct_solution(
        &self,
        ctx: &mut SpendContext,
        conditions: Conditions,
    ) -> Result<NodePtr, DriverError> {
        ctx.alloc(&clvm_list!(conditions))
    }
}

impl ToTreeHash for P2DelegatedConditionsLayer {
    fn tree_hash(&self) -> TreeHash {
        P2DelegatedConditionsArgs::new(self.public_key).curry_tree_hash()
    }
}
