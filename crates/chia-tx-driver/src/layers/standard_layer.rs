use chia_bls::PublicKey;
use chia_puzzle_types::standard::{StandardArgs, StandardSolution};
use chia_tx_types::Conditions;
use clvm_utils::{ToTreeHash, TreeHash};
use clvmr::NodePtr;

use crate::{DriverError, Layer, SpendContext};

/// The standard [`Layer`] is used for most coins on the Chia blockchain. It allows a single key
/// to spend the coin by providing a delegated puzzle (for example to output conditions).
///
/// The conditions are passed as the quoted delegated puzzle `(q . conditions)` with an empty
/// delegated solution, so the key signs the tree hash of that quoted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardLayer {
    pub synthetic_key: PublicKey,
}

impl StandardLayer {
    pub fn new(synthetic_key: PublicKey) -> Self {
        Self { synthetic_key }
    }
}

impl Layer for StandardLayer {
    fn construct_puzzle(&self, ctx: &mut SpendContext) -> Result<NodePtr, DriverError> {
        ctx.curry(StandardArgs::new(self.synthetic_key))
    }

    fn construct_solution(
        &self,
        ctx: &mut SpendContext,
        conditions: Conditions,
    ) -> Result<NodePtr, DriverError> {
        ctx.alloc(&StandardSolution::from_conditions(conditions))
    }
}

impl ToTreeHash for StandardLayer {
    fn tree_hash(&self) -> TreeHash {
        StandardArgs::curry_tree_hash(self.synthetic_key)
    }
}

#[cfg(test)]
mod tests {
    use chia_bls::SecretKey;
    use chia_protocol::Bytes32;
    use chia_tx_types::{opcodes, Condition};
    use clvm_traits::FromClvm;

    use super::*;

    #[test]
    fn test_standard_layer_outputs_conditions() -> anyhow::Result<()> {
        let mut ctx = SpendContext::new();

        let pk = SecretKey::from_seed(&[1; 32]).public_key();
        let layer = StandardLayer::new(pk);

        let puzzle = layer.construct_puzzle(&mut ctx)?;
        assert_eq!(ctx.tree_hash(puzzle), layer.tree_hash());

        let conditions = Conditions::new().create_coin(Bytes32::new([2; 32]), 30);
        let solution = layer.construct_solution(&mut ctx, conditions)?;

        let output = ctx.run(puzzle, solution)?;
        let output = Vec::<NodePtr>::from_clvm(&ctx.allocator, output)?;

        // The puzzle prepends the signature requirement to the delegated conditions.
        assert_eq!(output.len(), 2);
        let (opcode, _) = <(u16, NodePtr)>::from_clvm(&ctx.allocator, output[0])?;
        assert_eq!(opcode, opcodes::AGG_SIG_ME);
        assert_eq!(
            Condition::from_clvm(&ctx.allocator, output[1])?,
            Condition::CreateCoin {
                puzzle_hash: Bytes32::new([2; 32]),
                amount: 30
            }
        );

        Ok(())
    }

    #[test]
    fn test_standard_puzzle_hash_depends_on_key() {
        let a = StandardLayer::new(SecretKey::from_seed(&[1; 32]).public_key());
        let b = StandardLayer::new(SecretKey::from_seed(&[2; 32]).public_key());

        assert_ne!(a.tree_hash(), b.tree_hash());
    }
}
