use chia_bls::PublicKey;
use chia_protocol::{Bytes32, Coin};
use chia_tx_types::SpendRequest;
use serde::{de, Deserialize, Deserializer};

use crate::de::{hex_string_to_bytes32, hex_string_to_public_key};

/// A JSON description of a transaction, as a list of spends that are concatenated in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionDescription {
    pub spends: Vec<SpendDescription>,
}

/// A single entry of [`TransactionDescription::spends`].
///
/// An entry with `spend_requests` is passed to the assembler, and an entry with a `solution`
/// is used as is. Anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpendDescription {
    Assemble(AssembleDescription),
    Raw(RawSpendDescription),
}

impl<'de> Deserialize<'de> for SpendDescription {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        // The form is picked by key so that errors point at the field that failed.
        let spend = if value.get("spend_requests").is_some() {
            serde_json::from_value(value).map(Self::Assemble)
        } else if value.get("solution").is_some() {
            serde_json::from_value(value).map(Self::Raw)
        } else {
            let message = "spend entry has neither spend_requests nor a solution";
            return Err(de::Error::custom(message));
        };

        spend.map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssembleDescription {
    pub input_coins: Vec<InputCoinDescription>,
    pub spend_requests: Vec<SpendRequestDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSpendDescription {
    pub input_coin: CoinDescription,
    /// CLVM assembly, or serialized CLVM as `0x` prefixed hex.
    pub puzzle_reveal: String,
    /// CLVM assembly, or serialized CLVM as `0x` prefixed hex.
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputCoinDescription {
    pub coin: CoinDescription,
    #[serde(with = "hex_string_to_public_key")]
    pub pubkey: PublicKey,
    #[serde(default)]
    pub puzzle: PuzzleKind,
}

/// The puzzle family that an input coin's public key is curried into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    #[default]
    Standard,
    DelegatedConditions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CoinDescription {
    #[serde(with = "hex_string_to_bytes32")]
    pub parent_id: Bytes32,
    #[serde(with = "hex_string_to_bytes32")]
    pub puzzle_hash: Bytes32,
    pub amount: u64,
}

impl From<CoinDescription> for Coin {
    fn from(value: CoinDescription) -> Self {
        Coin::new(value.parent_id, value.puzzle_hash, value.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SpendRequestDescription {
    #[serde(with = "hex_string_to_bytes32")]
    pub puzzle_hash: Bytes32,
    pub amount: u64,
}

impl From<SpendRequestDescription> for SpendRequest {
    fn from(value: SpendRequestDescription) -> Self {
        SpendRequest::new(value.puzzle_hash, value.amount)
    }
}
