use std::collections::HashMap;

use chia_protocol::{Coin, CoinSpend, Program};
use chia_tx_types::{run_puzzle, CoinSolution, Mod};
use clvm_traits::{FromClvm, ToClvm};
use clvm_utils::{tree_hash, CurriedProgram, TreeHash};
use clvmr::{serde::node_from_bytes, Allocator, NodePtr};

use crate::{DriverError, Spend};

/// A wrapper around [`Allocator`] that caches puzzles.
/// Every transaction is assembled inside its own context, so independent
/// assemblies never share state.
#[derive(Debug, Default)]
pub struct SpendContext {
    pub allocator: Allocator,
    puzzles: HashMap<TreeHash, NodePtr>,
}

impl SpendContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new node and return its pointer.
    pub fn alloc<T>(&mut self, value: &T) -> Result<NodePtr, DriverError>
    where
        T: ToClvm<Allocator>,
    {
        Ok(value.to_clvm(&mut self.allocator)?)
    }

    /// Extract a value from a node pointer.
    pub fn extract<T>(&self, ptr: NodePtr) -> Result<T, DriverError>
    where
        T: FromClvm<Allocator>,
    {
        Ok(T::from_clvm(&self.allocator, ptr)?)
    }

    /// Compute the tree hash of a node pointer.
    pub fn tree_hash(&self, ptr: NodePtr) -> TreeHash {
        tree_hash(&self.allocator, ptr)
    }

    /// Run a puzzle with a solution and return the result.
    pub fn run(&mut self, puzzle: NodePtr, solution: NodePtr) -> Result<NodePtr, DriverError> {
        Ok(run_puzzle(&mut self.allocator, puzzle, solution)?)
    }

    /// Serialize a value and return a `Program`.
    pub fn serialize<T>(&mut self, value: &T) -> Result<Program, DriverError>
    where
        T: ToClvm<Allocator>,
    {
        let ptr = value.to_clvm(&mut self.allocator)?;
        Ok(Program::from_clvm(&self.allocator, ptr)?)
    }

    /// Curry the arguments into their cached mod.
    pub fn curry<T>(&mut self, args: T) -> Result<NodePtr, DriverError>
    where
        T: Mod + ToClvm<Allocator>,
    {
        let mod_ptr = self.puzzle(T::MOD_HASH, T::MOD_REVEAL)?;
        self.alloc(&CurriedProgram {
            program: mod_ptr,
            args,
        })
    }

    /// Get a puzzle from the cache or allocate a new one.
    pub fn puzzle(
        &mut self,
        puzzle_hash: TreeHash,
        puzzle_bytes: &[u8],
    ) -> Result<NodePtr, DriverError> {
        if let Some(puzzle) = self.puzzles.get(&puzzle_hash) {
            Ok(*puzzle)
        } else {
            let puzzle = node_from_bytes(&mut self.allocator, puzzle_bytes)?;
            self.puzzles.insert(puzzle_hash, puzzle);
            Ok(puzzle)
        }
    }

    /// Pairs a puzzle with its solution for `coin`, as long as the puzzle hashes to the
    /// coin's puzzle hash. A mismatch means the coin can't be spent with this puzzle.
    pub fn coin_solution(
        &mut self,
        coin: Coin,
        spend: Spend,
    ) -> Result<CoinSolution, DriverError> {
        let actual = self.tree_hash(spend.puzzle).into();

        if actual != coin.puzzle_hash {
            return Err(DriverError::PuzzleMismatch {
                coin_id: coin.coin_id(),
                expected: coin.puzzle_hash,
                actual,
            });
        }

        let puzzle_and_solution = self.serialize(&(spend.puzzle, (spend.solution, ())))?;
        Ok(CoinSolution::new(coin, puzzle_and_solution))
    }

    /// Allocates the `(puzzle solution)` program of a [`CoinSolution`] and splits it.
    pub fn split(&mut self, coin_solution: &CoinSolution) -> Result<Spend, DriverError> {
        let ptr = self.alloc(&coin_solution.puzzle_and_solution)?;
        let (puzzle, (solution, ())) = self.extract::<(NodePtr, (NodePtr, ()))>(ptr)?;
        Ok(Spend::new(puzzle, solution))
    }

    /// Converts a [`CoinSolution`] into the [`CoinSpend`] the network expects, which
    /// carries the puzzle reveal and solution separately.
    pub fn to_coin_spend(
        &mut self,
        coin_solution: &CoinSolution,
    ) -> Result<CoinSpend, DriverError> {
        let spend = self.split(coin_solution)?;
        let puzzle_reveal = self.serialize(&spend.puzzle)?;
        let solution = self.serialize(&spend.solution)?;
        Ok(CoinSpend::new(coin_solution.coin, puzzle_reveal, solution))
    }

    /// Converts a [`CoinSpend`] back into a [`CoinSolution`], checking the puzzle hash.
    pub fn from_coin_spend(
        &mut self,
        coin_spend: &CoinSpend,
    ) -> Result<CoinSolution, DriverError> {
        let puzzle = self.alloc(&coin_spend.puzzle_reveal)?;
        let solution = self.alloc(&coin_spend.solution)?;
        self.coin_solution(coin_spend.coin, Spend::new(puzzle, solution))
    }
}

#[cfg(test)]
mod tests {
    use chia_bls::PublicKey;
    use chia_protocol::Bytes32;
    use chia_puzzle_types::standard::StandardArgs;
    use clvmr::serde::node_to_bytes;

    use super::*;

    #[test]
    fn test_puzzle_cache() -> anyhow::Result<()> {
        let mut ctx = SpendContext::new();

        let first = ctx.puzzle(StandardArgs::MOD_HASH, StandardArgs::MOD_REVEAL)?;
        let second = ctx.puzzle(StandardArgs::MOD_HASH, StandardArgs::MOD_REVEAL)?;

        assert_eq!(first, second);
        assert_eq!(ctx.tree_hash(first), StandardArgs::MOD_HASH);

        // Currying reuses the cached mod.
        let curried = ctx.curry(StandardArgs::new(PublicKey::default()))?;
        let (_, ((_, program), _)) =
            ctx.extract::<(NodePtr, ((NodePtr, NodePtr), NodePtr))>(curried)?;
        assert_eq!(program, first);

        Ok(())
    }

    #[test]
    fn test_coin_solution_round_trip() -> anyhow::Result<()> {
        let mut ctx = SpendContext::new();

        // The puzzle `1` returns its solution unchanged.
        let puzzle = ctx.alloc(&1)?;
        let solution = ctx.alloc(&[42])?;
        let puzzle_hash = ctx.tree_hash(puzzle).into();
        let coin = Coin::new(Bytes32::new([1; 32]), puzzle_hash, 5);

        let coin_solution = ctx.coin_solution(coin, Spend::new(puzzle, solution))?;
        let bytes = coin_solution.puzzle_and_solution.clone().into_bytes();
        assert_eq!(hex::encode(bytes), "ff01ffff2a8080");

        let coin_spend = ctx.to_coin_spend(&coin_solution)?;
        let puzzle_reveal = coin_spend.puzzle_reveal.clone().into_bytes();
        assert_eq!(hex::encode(puzzle_reveal), "01");
        let solution = coin_spend.solution.clone().into_bytes();
        assert_eq!(hex::encode(solution), "ff2a80");

        assert_eq!(ctx.from_coin_spend(&coin_spend)?, coin_solution);

        let spend = ctx.split(&coin_solution)?;
        let solution = node_to_bytes(&ctx.allocator, spend.solution)?;
        assert_eq!(solution, [0xff, 0x2a, 0x80]);

        Ok(())
    }

    #[test]
    fn test_coin_solution_puzzle_mismatch() -> anyhow::Result<()> {
        let mut ctx = SpendContext::new();

        let puzzle = ctx.alloc(&1)?;
        let coin = Coin::new(Bytes32::new([1; 32]), Bytes32::new([2; 32]), 5);

        let Err(DriverError::PuzzleMismatch {
            coin_id,
            expected,
            actual,
        }) = ctx.coin_solution(coin, Spend::new(puzzle, NodePtr::NIL))
        else {
            panic!("expected a puzzle mismatch");
        };

        assert_eq!(coin_id, coin.coin_id());
        assert_eq!(expected, coin.puzzle_hash);
        assert_eq!(actual, Bytes32::from(ctx.tree_hash(puzzle)));

        Ok(())
    }
}
