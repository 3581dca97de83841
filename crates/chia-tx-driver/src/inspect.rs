use chia_protocol::{Bytes32, Coin};
use chia_tx_types::{CoinSolution, Condition, SpendBundle};
use clvmr::NodePtr;

use crate::{DriverError, SpendContext};

/// What a single coin solution does once its puzzle is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendSummary {
    pub coin_id: Bytes32,
    pub coin: Coin,
    /// The tree hash of the revealed puzzle.
    pub puzzle_hash: Bytes32,
    pub puzzle_hash_matches: bool,
    /// The conditions output by the puzzle that have a known opcode, in output order.
    pub conditions: Vec<Condition>,
    /// How many other conditions the puzzle output, such as signature requirements.
    pub other_conditions: usize,
}

/// The combined effect of every spend in a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub spends: Vec<SpendSummary>,
    pub additions: Vec<Coin>,
    pub removals: Vec<Coin>,
    pub removed_value: u128,
    pub added_value: u128,
    /// The sum of every [`Condition::AssertFee`] in the bundle.
    pub declared_fee: u128,
}

impl BundleSummary {
    /// The value left over for the farmer, or [`None`] if the bundle creates more than it spends.
    pub fn implied_fee(&self) -> Option<u128> {
        self.removed_value.checked_sub(self.added_value)
    }
}

/// Runs every puzzle in the bundle against its solution and summarizes the result.
pub fn inspect_spend_bundle(spend_bundle: &SpendBundle) -> Result<BundleSummary, DriverError> {
    let mut ctx = SpendContext::new();

    let mut spends = Vec::with_capacity(spend_bundle.coin_solutions.len());
    let mut additions = Vec::new();
    let mut removals = Vec::with_capacity(spend_bundle.coin_solutions.len());
    let mut declared_fee = 0;

    for coin_solution in &spend_bundle.coin_solutions {
        let summary = inspect_coin_solution(&mut ctx, coin_solution)?;

        for condition in &summary.conditions {
            match *condition {
                Condition::CreateCoin {
                    puzzle_hash,
                    amount,
                } => additions.push(Coin::new(summary.coin_id, puzzle_hash, amount)),
                Condition::AssertFee { amount } => declared_fee += u128::from(amount),
                _ => {}
            }
        }

        removals.push(summary.coin);
        spends.push(summary);
    }

    let removed_value = removals.iter().map(|coin| u128::from(coin.amount)).sum();
    let added_value = additions.iter().map(|coin| u128::from(coin.amount)).sum();

    Ok(BundleSummary {
        spends,
        additions,
        removals,
        removed_value,
        added_value,
        declared_fee,
    })
}

fn inspect_coin_solution(
    ctx: &mut SpendContext,
    coin_solution: &CoinSolution,
) -> Result<SpendSummary, DriverError> {
    let coin = coin_solution.coin;
    let spend = ctx.split(coin_solution)?;

    let puzzle_hash: Bytes32 = ctx.tree_hash(spend.puzzle).into();
    let output = ctx.run(spend.puzzle, spend.solution)?;

    let mut conditions = Vec::new();
    let mut other_conditions = 0;

    for condition in ctx.extract::<Vec<NodePtr>>(output)? {
        let (opcode, _) = ctx.extract::<(u16, NodePtr)>(condition)?;

        if Condition::is_known_opcode(opcode) {
            conditions.push(ctx.extract::<Condition>(condition)?);
        } else {
            other_conditions += 1;
        }
    }

    Ok(SpendSummary {
        coin_id: coin.coin_id(),
        coin,
        puzzle_hash,
        puzzle_hash_matches: puzzle_hash == coin.puzzle_hash,
        conditions,
        other_conditions,
    })
}

/// Inspects the bundle and checks it the way the assembler would have.
///
/// Every revealed puzzle has to hash to its coin's puzzle hash, the additions can't exceed the
/// removals, and the declared fee has to be covered by what's left over.
pub fn verify_spend_bundle(spend_bundle: &SpendBundle) -> Result<BundleSummary, DriverError> {
    let summary = inspect_spend_bundle(spend_bundle)?;

    for spend in &summary.spends {
        if !spend.puzzle_hash_matches {
            return Err(DriverError::PuzzleMismatch {
                coin_id: spend.coin_id,
                expected: spend.coin.puzzle_hash,
                actual: spend.puzzle_hash,
            });
        }
    }

    let Some(implied_fee) = summary.implied_fee() else {
        return Err(DriverError::InsufficientFunds {
            input: summary.removed_value,
            output: summary.added_value,
        });
    };

    if summary.declared_fee > implied_fee {
        return Err(DriverError::InvalidArgument(format!(
            "declared fee {} exceeds the implied fee {implied_fee}",
            summary.declared_fee
        )));
    }

    tracing::info!(
        "verified {} spends with an implied fee of {implied_fee}",
        summary.spends.len()
    );

    Ok(summary)
}
