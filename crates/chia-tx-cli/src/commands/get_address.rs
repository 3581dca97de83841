use anyhow::Result;
use chia_tx::client::{HttpWalletClient, WalletRpcClient, WalletRpcConfig};

use crate::args::WalletIdArgs;

pub async fn get_address(args: &WalletIdArgs, config: &WalletRpcConfig) -> Result<()> {
    let client = HttpWalletClient::from_config(config);

    println!("{}", client.get_next_address(args.wallet_id).await?);

    Ok(())
}
