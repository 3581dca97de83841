use chia_protocol::SpendBundle as NetworkSpendBundle;
use chia_tx_types::SpendBundle;

use crate::{DriverError, SpendContext};

/// Converts a bundle into the form the full node accepts, where every coin spend carries its
/// puzzle reveal and solution as separate programs.
pub fn to_network_spend_bundle(
    spend_bundle: &SpendBundle,
) -> Result<NetworkSpendBundle, DriverError> {
    let mut ctx = SpendContext::new();

    let coin_spends = spend_bundle
        .coin_solutions
        .iter()
        .map(|coin_solution| ctx.to_coin_spend(coin_solution))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NetworkSpendBundle::new(coin_spends, spend_bundle.aggregated_signature.clone()))
}

/// Converts a bundle from the full node's form. Every puzzle reveal is checked against its coin.
pub fn from_network_spend_bundle(
    spend_bundle: &NetworkSpendBundle,
) -> Result<SpendBundle, DriverError> {
    let mut ctx = SpendContext::new();

    let coin_solutions = spend_bundle
        .coin_spends
        .iter()
        .map(|coin_spend| ctx.from_coin_spend(coin_spend))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SpendBundle::new(coin_solutions, spend_bundle.aggregated_signature.clone()))
}
