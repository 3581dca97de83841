use chia_protocol::Bytes32;
use clvm_traits::{ClvmEncoder, FromClvm, FromClvmError, ToClvm, ToClvmError};
use clvmr::{Allocator, NodePtr};

use crate::{Condition, SpendRequest};

/// An ordered list of [`Condition`] values, serialized as a plain CLVM list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Conditions {
    conditions: Vec<Condition>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn extend(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn create_coin(self, puzzle_hash: Bytes32, amount: u64) -> Self {
        self.condition(Condition::CreateCoin {
            puzzle_hash,
            amount,
        })
    }

    pub fn assert_coin_consumed(self, coin_id: Bytes32) -> Self {
        self.condition(Condition::AssertCoinConsumed { coin_id })
    }

    pub fn assert_time_exceeds(self, seconds: u64) -> Self {
        self.condition(Condition::AssertTimeExceeds { seconds })
    }

    pub fn assert_my_coin_id(self, coin_id: Bytes32) -> Self {
        self.condition(Condition::AssertMyCoinId { coin_id })
    }

    pub fn assert_fee(self, amount: u64) -> Self {
        self.condition(Condition::AssertFee { amount })
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }

    /// The outputs requested by every [`Condition::CreateCoin`] in the list, in order.
    pub fn create_coins(&self) -> impl Iterator<Item = SpendRequest> + '_ {
        self.conditions.iter().filter_map(|condition| match *condition {
            Condition::CreateCoin {
                puzzle_hash,
                amount,
            } => Some(SpendRequest::new(puzzle_hash, amount)),
            _ => None,
        })
    }
}

impl AsRef<[Condition]> for Conditions {
    fn as_ref(&self) -> &[Condition] {
        &self.conditions
    }
}

impl IntoIterator for Conditions {
    type Item = Condition;
    type IntoIter = std::vec::IntoIter<Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Conditions {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

impl FromIterator<Condition> for Conditions {
    fn from_iter<T: IntoIterator<Item = Condition>>(iter: T) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}

impl<N, E: ClvmEncoder<Node = N>> ToClvm<E> for Conditions {
    fn to_clvm(&self, encoder: &mut E) -> Result<N, ToClvmError> {
        self.conditions.to_clvm(encoder)
    }
}

impl FromClvm<Allocator> for Conditions {
    fn from_clvm(allocator: &Allocator, node: NodePtr) -> Result<Self, FromClvmError> {
        Ok(Self {
            conditions: Vec::<Condition>::from_clvm(allocator, node)?,
        })
    }
}

/// Optional assertions that are appended after the outputs of a solution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpendAssertions {
    /// Emits [`Condition::AssertTimeExceeds`] when nonzero.
    pub min_time: u64,
    /// Emits [`Condition::AssertMyCoinId`] when set.
    pub my_coin_id: Option<Bytes32>,
    /// Emits one [`Condition::AssertCoinConsumed`] per id, in order.
    pub consumed_coin_ids: Vec<Bytes32>,
    /// Emits [`Condition::AssertFee`] when nonzero.
    pub fee: u64,
}

/// Builds the condition list used as the solution of a delegated spend.
///
/// Outputs come first in the order given, followed by the consumed coin assertions,
/// the time lock, the coin id assertion and finally the fee.
pub fn build_solution(primaries: &[SpendRequest], assertions: &SpendAssertions) -> Conditions {
    let mut conditions = primaries
        .iter()
        .map(|primary| Condition::CreateCoin {
            puzzle_hash: primary.puzzle_hash,
            amount: primary.amount,
        })
        .collect::<Conditions>()
        .extend(
            assertions
                .consumed_coin_ids
                .iter()
                .map(|&coin_id| Condition::AssertCoinConsumed { coin_id }),
        );

    if assertions.min_time > 0 {
        conditions = conditions.assert_time_exceeds(assertions.min_time);
    }

    if let Some(coin_id) = assertions.my_coin_id {
        conditions = conditions.assert_my_coin_id(coin_id);
    }

    if assertions.fee > 0 {
        conditions = conditions.assert_fee(assertions.fee);
    }

    conditions
}

#[cfg(test)]
mod tests {
    use clvmr::serde::node_to_bytes;

    use super::*;

    #[test]
    fn test_empty_solution() -> anyhow::Result<()> {
        let conditions = build_solution(&[], &SpendAssertions::default());
        assert!(conditions.is_empty());

        let mut allocator = Allocator::new();
        let ptr = conditions.to_clvm(&mut allocator)?;
        assert_eq!(hex::encode(node_to_bytes(&allocator, ptr)?), "80");

        Ok(())
    }

    #[test]
    fn test_primaries_keep_order() {
        let a = SpendRequest::new(Bytes32::new([1; 32]), 10);
        let b = SpendRequest::new(Bytes32::new([2; 32]), 20);

        let conditions = build_solution(&[a, b], &SpendAssertions::default());

        assert_eq!(conditions.create_coins().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(
            conditions.as_ref(),
            &[
                Condition::CreateCoin {
                    puzzle_hash: a.puzzle_hash,
                    amount: 10
                },
                Condition::CreateCoin {
                    puzzle_hash: b.puzzle_hash,
                    amount: 20
                },
            ]
        );
    }

    #[test]
    fn test_all_assertions() {
        let output = SpendRequest::new(Bytes32::new([3; 32]), 5);
        let consumed = [Bytes32::new([4; 32]), Bytes32::new([5; 32])];
        let me = Bytes32::new([6; 32]);

        let conditions = build_solution(
            &[output],
            &SpendAssertions {
                min_time: 1_700_000_000,
                my_coin_id: Some(me),
                consumed_coin_ids: consumed.to_vec(),
                fee: 25,
            },
        );

        assert_eq!(
            conditions.into_iter().collect::<Vec<_>>(),
            vec![
                Condition::CreateCoin {
                    puzzle_hash: output.puzzle_hash,
                    amount: 5
                },
                Condition::AssertCoinConsumed {
                    coin_id: consumed[0]
                },
                Condition::AssertCoinConsumed {
                    coin_id: consumed[1]
                },
                Condition::AssertTimeExceeds {
                    seconds: 1_700_000_000
                },
                Condition::AssertMyCoinId { coin_id: me },
                Condition::AssertFee { amount: 25 },
            ]
        );
    }

    #[test]
    fn test_zero_values_are_omitted() {
        let conditions = build_solution(
            &[],
            &SpendAssertions {
                min_time: 0,
                my_coin_id: None,
                consumed_coin_ids: Vec::new(),
                fee: 0,
            },
        );

        assert_eq!(conditions, Conditions::new());
    }

    #[test]
    fn test_conditions_from_clvm() -> anyhow::Result<()> {
        let mut allocator = Allocator::new();
        let conditions = Conditions::new()
            .create_coin(Bytes32::new([7; 32]), 1)
            .assert_fee(1);

        let ptr = conditions.to_clvm(&mut allocator)?;
        assert_eq!(Conditions::from_clvm(&allocator, ptr)?, conditions);

        Ok(())
    }
}
