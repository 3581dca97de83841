use anyhow::Result;
use chia_tx::client::{HttpWalletClient, WalletRpcClient, WalletRpcConfig};

use crate::args::TransactionArgs;

use super::sign::create_and_sign;

pub async fn push(args: &TransactionArgs, config: &WalletRpcConfig) -> Result<()> {
    let client = HttpWalletClient::from_config(config);

    let signed = create_and_sign(&client, &args.json).await?;
    client.push_spend_bundle(&signed).await?;

    let spends = signed.coin_solutions.len();
    println!("pushed spend bundle with {spends} spends");

    Ok(())
}
