use chia_puzzle_types::standard::StandardArgs;
use chia_puzzles::{
    P2_DELEGATED_PUZZLE_OR_HIDDEN_PUZZLE, P2_DELEGATED_PUZZLE_OR_HIDDEN_PUZZLE_HASH,
};
use clvm_traits::ToClvm;
use clvm_utils::{CurriedProgram, TreeHash, TreeHasher};

/// This trait makes it possible to get the mod hash or puzzle reveal of a puzzle.
///
/// It should be implemented for types that represent the curried arguments of puzzles.
/// The curried tree hash can then be computed without allocating the puzzle, which is
/// how a spend authority's puzzle hash is checked against a coin before anything is built.
///
/// ## Usage Example
///
/// ```rust
/// # use chia_bls::PublicKey;
/// # use chia_tx_types::{Mod, P2DelegatedConditionsArgs};
/// let args = P2DelegatedConditionsArgs::new(PublicKey::default());
/// let puzzle_hash = args.curry_tree_hash();
/// ```
pub trait Mod {
    const MOD_REVEAL: &'static [u8];
    const MOD_HASH: TreeHash;

    /// Curry the arguments into the [`MOD_HASH`](Mod::MOD_HASH).
    fn curry_tree_hash(&self) -> TreeHash
    where
        Self: Sized + ToClvm<TreeHasher>,
    {
        CurriedProgram {
            program: Self::MOD_HASH,
            args: self,
        }
        .to_clvm(&mut TreeHasher)
        .unwrap()
    }
}

impl<T> Mod for &T
where
    T: Mod,
{
    const MOD_REVEAL: &'static [u8] = T::MOD_REVEAL;
    const MOD_HASH: TreeHash = T::MOD_HASH;
}

impl Mod for StandardArgs {
    const MOD_REVEAL: &'static [u8] = &P2_DELEGATED_PUZZLE_OR_HIDDEN_PUZZLE;
    const MOD_HASH: TreeHash = TreeHash::new(P2_DELEGATED_PUZZLE_OR_HIDDEN_PUZZLE_HASH);
}
