use chia_protocol::Bytes32;

/// An output that a transaction should create.
/// Unlike a [`Coin`](chia_protocol::Coin), it has no parent yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpendRequest {
    pub puzzle_hash: Bytes32,
    pub amount: u64,
}

impl SpendRequest {
    pub fn new(puzzle_hash: Bytes32, amount: u64) -> Self {
        Self {
            puzzle_hash,
            amount,
        }
    }
}
