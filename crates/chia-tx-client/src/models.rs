use chia_protocol::{Bytes32, Coin};
use serde::Deserialize;

use crate::{de::hex_string_to_bytes32, ClientError};

#[derive(Deserialize, Debug, Clone)]
pub struct SignSpendBundleResponse {
    pub spend_bundle: Option<String>,
    pub error: Option<String>,
    pub success: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PushTxResponse {
    pub status: Option<String>,
    pub error: Option<String>,
    pub success: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GetSpendableCoinsResponse {
    pub coins: Option<Vec<SpendableCoin>>,
    pub error: Option<String>,
    pub success: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GetNextAddressResponse {
    pub address: Option<String>,
    pub error: Option<String>,
    pub success: bool,
}

/// A coin the wallet can spend, along with the serialized puzzle locking it if the wallet knows it.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpendableCoin {
    pub coin: CoinJson,
    pub puzzle: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinJson {
    #[serde(alias = "parent_id", with = "hex_string_to_bytes32")]
    pub parent_coin_info: Bytes32,
    #[serde(with = "hex_string_to_bytes32")]
    pub puzzle_hash: Bytes32,
    pub amount: u64,
}

impl From<CoinJson> for Coin {
    fn from(value: CoinJson) -> Self {
        Coin::new(value.parent_coin_info, value.puzzle_hash, value.amount)
    }
}

/// Turns a response with `success == false` into [`ClientError::Rejected`].
pub(crate) fn check_success(success: bool, error: Option<String>) -> Result<(), ClientError> {
    if success {
        Ok(())
    } else {
        let error = error.unwrap_or_else(|| "unknown error".to_string());
        tracing::warn!("wallet rejected the request: {error}");
        Err(ClientError::Rejected(error))
    }
}
