use chia_protocol::Bytes32;
use clvm_traits::{clvm_list, ClvmEncoder, FromClvm, FromClvmError, ToClvm, ToClvmError};
use clvmr::{Allocator, NodePtr};

pub mod opcodes {
    pub const AGG_SIG_ME: u16 = 50;
    pub const CREATE_COIN: u16 = 51;
    pub const RESERVE_FEE: u16 = 52;
    pub const ASSERT_CONCURRENT_SPEND: u16 = 64;
    pub const ASSERT_MY_COIN_ID: u16 = 70;
    pub const ASSERT_SECONDS_ABSOLUTE: u16 = 81;
}

use opcodes::{
    ASSERT_CONCURRENT_SPEND, ASSERT_MY_COIN_ID, ASSERT_SECONDS_ABSOLUTE, CREATE_COIN, RESERVE_FEE,
};

/// A condition that a raw transaction can ask a coin's puzzle to output.
///
/// The order in which conditions are added to a solution is the order in which they
/// are serialized, and therefore the order in which the puzzle outputs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Creates a new coin with the given puzzle hash and amount. The spent coin becomes its parent.
    CreateCoin { puzzle_hash: Bytes32, amount: u64 },

    /// Requires the timestamp of the block including the spend to exceed `seconds`.
    /// Encoded as `ASSERT_SECONDS_ABSOLUTE`.
    AssertTimeExceeds { seconds: u64 },

    /// Requires the coin with the given id to be spent in the same block.
    /// Encoded as `ASSERT_CONCURRENT_SPEND`.
    AssertCoinConsumed { coin_id: Bytes32 },

    /// Requires the coin being spent to have the given id.
    AssertMyCoinId { coin_id: Bytes32 },

    /// Requires the spend bundle to leave at least `amount` mojos as fee.
    /// Encoded as `RESERVE_FEE`.
    AssertFee { amount: u64 },
}

impl Condition {
    pub fn opcode(&self) -> u16 {
        match self {
            Self::CreateCoin { .. } => CREATE_COIN,
            Self::AssertTimeExceeds { .. } => ASSERT_SECONDS_ABSOLUTE,
            Self::AssertCoinConsumed { .. } => ASSERT_CONCURRENT_SPEND,
            Self::AssertMyCoinId { .. } => ASSERT_MY_COIN_ID,
            Self::AssertFee { .. } => RESERVE_FEE,
        }
    }

    pub fn is_known_opcode(opcode: u16) -> bool {
        matches!(
            opcode,
            CREATE_COIN
                | ASSERT_SECONDS_ABSOLUTE
                | ASSERT_CONCURRENT_SPEND
                | ASSERT_MY_COIN_ID
                | RESERVE_FEE
        )
    }
}

impl<N, E: ClvmEncoder<Node = N>> ToClvm<E> for Condition {
    fn to_clvm(&self, encoder: &mut E) -> Result<N, ToClvmError> {
        let opcode = self.opcode();

        match *self {
            Self::CreateCoin {
                puzzle_hash,
                amount,
            } => clvm_list!(opcode, puzzle_hash, amount).to_clvm(encoder),
            Self::AssertTimeExceeds { seconds } => clvm_list!(opcode, seconds).to_clvm(encoder),
            Self::AssertCoinConsumed { coin_id } | Self::AssertMyCoinId { coin_id } => {
                clvm_list!(opcode, coin_id).to_clvm(encoder)
            }
            Self::AssertFee { amount } => clvm_list!(opcode, amount).to_clvm(encoder),
        }
    }
}

impl FromClvm<Allocator> for Condition {
    fn from_clvm(allocator: &Allocator, node: NodePtr) -> Result<Self, FromClvmError> {
        let (opcode, args) = <(u16, NodePtr)>::from_clvm(allocator, node)?;

        let condition = match opcode {
            // Arguments past the ones a condition defines are ignored, as consensus does.
            // For `CREATE_COIN` that is the memo list.
            CREATE_COIN => {
                let (puzzle_hash, (amount, _rest)) =
                    <(Bytes32, (u64, NodePtr))>::from_clvm(allocator, args)?;
                Self::CreateCoin {
                    puzzle_hash,
                    amount,
                }
            }
            ASSERT_SECONDS_ABSOLUTE => {
                let (seconds, _rest) = <(u64, NodePtr)>::from_clvm(allocator, args)?;
                Self::AssertTimeExceeds { seconds }
            }
            ASSERT_CONCURRENT_SPEND => {
                let (coin_id, _rest) = <(Bytes32, NodePtr)>::from_clvm(allocator, args)?;
                Self::AssertCoinConsumed { coin_id }
            }
            ASSERT_MY_COIN_ID => {
                let (coin_id, _rest) = <(Bytes32, NodePtr)>::from_clvm(allocator, args)?;
                Self::AssertMyCoinId { coin_id }
            }
            RESERVE_FEE => {
                let (amount, _rest) = <(u64, NodePtr)>::from_clvm(allocator, args)?;
                Self::AssertFee { amount }
            }
            _ => {
                let message = format!("unsupported condition opcode {opcode}");
                return Err(FromClvmError::Custom(message));
            }
        };

        Ok(condition)
    }
}
