use chia_protocol::Bytes32;
use clvm_traits::{FromClvmError, ToClvmError};
use clvmr::reduction::EvalErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("insufficient funds: inputs total {input} but outputs total {output}")]
    InsufficientFunds { input: u128, output: u128 },

    #[error("coin {coin_id} expects puzzle hash {expected}, got {actual}")]
    PuzzleMismatch {
        coin_id: Bytes32,
        expected: Bytes32,
        actual: Bytes32,
    },

    #[error("malformed spend bundle: {0}")]
    MalformedBundle(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize clvm value: {0}")]
    ToClvm(#[from] ToClvmError),

    #[error("failed to deserialize clvm value: {0}")]
    FromClvm(#[from] FromClvmError),

    #[error("clvm eval error: {0}")]
    Eval(#[from] EvalErr),
}
