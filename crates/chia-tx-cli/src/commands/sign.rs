use anyhow::Result;
use chia_tx::{
    client::{HttpWalletClient, WalletRpcClient, WalletRpcConfig},
    driver, parser,
    types::SpendBundle,
};

use crate::{args::TransactionArgs, input::read_argument, summary::format_summary};

pub async fn sign(args: &TransactionArgs, config: &WalletRpcConfig) -> Result<()> {
    let client = HttpWalletClient::from_config(config);
    let signed = create_and_sign(&client, &args.json).await?;

    println!("{}", driver::encode_spend_bundle_hex(&signed)?);

    Ok(())
}

/// Parses the description and has the wallet sign the resulting bundle.
pub(crate) async fn create_and_sign(
    client: &impl WalletRpcClient,
    json: &str,
) -> Result<SpendBundle> {
    let unsigned = parser::parse_transaction(&read_argument(json)?)?;
    let signed = client.sign_spend_bundle(&unsigned).await?;

    let summary = driver::inspect_spend_bundle(&signed)?;
    tracing::info!("signed spend bundle\n{}", format_summary(&summary));

    Ok(signed)
}
