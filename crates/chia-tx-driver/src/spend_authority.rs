use chia_bls::PublicKey;
use chia_protocol::{Bytes32, Coin, Program};
use chia_tx_types::{CoinSolution, Conditions};
use clvm_utils::ToTreeHash;

use crate::{
    DriverError, Layer, P2DelegatedConditionsLayer, RawPuzzleLayer, Spend, SpendContext,
    StandardLayer,
};

/// What authorizes a coin to be spent, and therefore which puzzle is revealed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpendAuthority {
    /// The standard transaction puzzle curried with a synthetic public key.
    Standard(PublicKey),
    /// The p2 delegated conditions puzzle curried with a public key.
    DelegatedConditions(PublicKey),
    /// A puzzle that is revealed as is, and solved with the bare condition list.
    Puzzle(Program),
}

impl SpendAuthority {
    /// The puzzle hash of coins locked by this authority.
    pub fn puzzle_hash(&self, ctx: &mut SpendContext) -> Result<Bytes32, DriverError> {
        let tree_hash = match self {
            Self::Standard(public_key) => StandardLayer::new(*public_key).tree_hash(),
            Self::DelegatedConditions(public_key) => {
                P2DelegatedConditionsLayer::new(*public_key).tree_hash()
            }
            Self::Puzzle(puzzle) => {
                let ptr = ctx.alloc(puzzle)?;
                ctx.tree_hash(ptr)
            }
        };
        Ok(tree_hash.into())
    }

    /// Builds the puzzle and solution that output `conditions`, without checking the coin.
    pub fn inner_spend(
        &self,
        ctx: &mut SpendContext,
        conditions: Conditions,
    ) -> Result<Spend, DriverError> {
        match self {
            Self::Standard(public_key) => {
                layer_spend(ctx, &StandardLayer::new(*public_key), conditions)
            }
            Self::DelegatedConditions(public_key) => layer_spend(
                ctx,
                &P2DelegatedConditionsLayer::new(*public_key),
                conditions,
            ),
            Self::Puzzle(puzzle) => {
                layer_spend(ctx, &RawPuzzleLayer::new(puzzle.clone()), conditions)
            }
        }
    }

    /// Spends `coin` so that its puzzle outputs `conditions`.
    ///
    /// Fails with [`DriverError::PuzzleMismatch`] if the puzzle of this authority doesn't
    /// hash to the coin's puzzle hash.
    pub fn spend(
        &self,
        ctx: &mut SpendContext,
        coin: Coin,
        conditions: Conditions,
    ) -> Result<CoinSolution, DriverError> {
        let spend = self.inner_spend(ctx, conditions)?;
        ctx.coin_solution(coin, spend)
    }
}

fn layer_spend(
    ctx: &mut SpendContext,
    layer: &impl Layer,
    conditions: Conditions,
) -> Result<Spend, DriverError> {
    let puzzle = layer.construct_puzzle(ctx)?;
    let solution = layer.construct_solution(ctx, conditions)?;
    Ok(Spend::new(puzzle, solution))
}

#[cfg(test)]
mod tests {
    use chia_bls::SecretKey;
    use rstest::rstest;

    use super::*;

    fn authority(kind: &str) -> SpendAuthority {
        let pk = SecretKey::from_seed(&[7; 32]).public_key();

        match kind {
            "standard" => SpendAuthority::Standard(pk),
            "delegated_conditions" => SpendAuthority::DelegatedConditions(pk),
            _ => SpendAuthority::Puzzle(Program::new(vec![0x01].into())),
        }
    }

    #[rstest]
    #[case::standard("standard")]
    #[case::delegated_conditions("delegated_conditions")]
    #[case::puzzle("puzzle")]
    fn test_spend_matching_coin(#[case] kind: &str) -> anyhow::Result<()> {
        let mut ctx = SpendContext::new();
        let authority = authority(kind);

        let puzzle_hash = authority.puzzle_hash(&mut ctx)?;
        let coin = Coin::new(Bytes32::new([1; 32]), puzzle_hash, 100);

        let conditions = Conditions::new().create_coin(puzzle_hash, 99);
        let coin_solution = authority.spend(&mut ctx, coin, conditions)?;
        assert_eq!(coin_solution.coin, coin);

        let spend = ctx.split(&coin_solution)?;
        assert_eq!(Bytes32::from(ctx.tree_hash(spend.puzzle)), puzzle_hash);

        Ok(())
    }

    #[rstest]
    #[case::standard("standard")]
    #[case::delegated_conditions("delegated_conditions")]
    #[case::puzzle("puzzle")]
    fn test_spend_mismatched_coin(#[case] kind: &str) -> anyhow::Result<()> {
        let mut ctx = SpendContext::new();
        let authority = authority(kind);

        let coin = Coin::new(Bytes32::new([1; 32]), Bytes32::new([0xaa; 32]), 100);

        assert!(matches!(
            authority.spend(&mut ctx, coin, Conditions::new()),
            Err(DriverError::PuzzleMismatch { .. })
        ));

        Ok(())
    }

    #[test]
    fn test_puzzle_families_differ() -> anyhow::Result<()> {
        let mut ctx = SpendContext::new();

        assert_ne!(
            authority("standard").puzzle_hash(&mut ctx)?,
            authority("delegated_conditions").puzzle_hash(&mut ctx)?
        );

        Ok(())
    }
}
