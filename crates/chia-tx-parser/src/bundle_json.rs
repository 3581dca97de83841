use chia_protocol::Coin;
use chia_tx_types::{CoinSolution, SpendBundle};
use hex::encode;
use serde::Serialize;

#[derive(Serialize)]
struct SerializableCoin {
    parent_coin_info: String,
    puzzle_hash: String,
    amount: u64,
}

#[derive(Serialize)]
struct SerializableCoinSolution {
    coin: SerializableCoin,
    solution: String,
}

#[derive(Serialize)]
struct SerializableSpendBundle {
    coin_solutions: Vec<SerializableCoinSolution>,
    aggregated_signature: String,
}

impl From<&Coin> for SerializableCoin {
    fn from(coin: &Coin) -> Self {
        SerializableCoin {
            parent_coin_info: format!("0x{}", encode(coin.parent_coin_info)),
            puzzle_hash: format!("0x{}", encode(coin.puzzle_hash)),
            amount: coin.amount,
        }
    }
}

impl From<&CoinSolution> for SerializableCoinSolution {
    fn from(coin_solution: &CoinSolution) -> Self {
        SerializableCoinSolution {
            coin: SerializableCoin::from(&coin_solution.coin),
            solution: format!(
                "0x{}",
                encode(coin_solution.puzzle_and_solution.clone().into_bytes())
            ),
        }
    }
}

impl From<&SpendBundle> for SerializableSpendBundle {
    fn from(spend_bundle: &SpendBundle) -> Self {
        SerializableSpendBundle {
            coin_solutions: spend_bundle
                .coin_solutions
                .iter()
                .map(SerializableCoinSolution::from)
                .collect(),
            aggregated_signature: format!(
                "0x{}",
                encode(spend_bundle.aggregated_signature.to_bytes())
            ),
        }
    }
}

/// Renders a bundle as pretty printed JSON, with every byte string as `0x` prefixed hex.
pub fn spend_bundle_to_json(spend_bundle: &SpendBundle) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SerializableSpendBundle::from(spend_bundle))
}
