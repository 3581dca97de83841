use chia_bls::PublicKey;
use chia_puzzles::{P2_DELEGATED_CONDITIONS, P2_DELEGATED_CONDITIONS_HASH};
use clvm_traits::{FromClvm, ToClvm};
use clvm_utils::TreeHash;

use crate::Mod;

/// The curried arguments of the p2 delegated conditions puzzle.
///
/// Its solution is `(conditions)`. The puzzle requires a signature by `public_key`
/// over the tree hash of the conditions and then outputs them unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ToClvm, FromClvm)]
#[clvm(curry)]
pub struct P2DelegatedConditionsArgs {
    pub public_key: PublicKey,
}

impl P2DelegatedConditionsArgs {
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }
}

impl Mod for P2DelegatedConditionsArgs {
    const MOD_REVEAL: &'static [u8] = &P2_DELEGATED_CONDITIONS;
    const MOD_HASH: TreeHash = TreeHash::new(P2_DELEGATED_CONDITIONS_HASH);
}
