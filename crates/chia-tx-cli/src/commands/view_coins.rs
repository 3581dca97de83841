use anyhow::Result;
use chia_protocol::Coin;
use chia_tx::{
    client::{HttpWalletClient, WalletRpcClient, WalletRpcConfig},
    parser::disassemble_program_hex,
};

use crate::args::WalletIdArgs;

pub async fn view_coins(args: &WalletIdArgs, config: &WalletRpcConfig) -> Result<()> {
    let client = HttpWalletClient::from_config(config);
    let coins = client.get_spendable_coins(args.wallet_id).await?;

    for spendable in coins {
        let coin = Coin::from(spendable.coin);

        println!("coin {}", coin.coin_id());
        println!("  parent_id: 0x{}", coin.parent_coin_info);
        println!("  puzzle_hash: 0x{}", coin.puzzle_hash);
        println!("  amount: {}", coin.amount);

        let Some(puzzle) = spendable.puzzle else {
            continue;
        };

        match disassemble_program_hex(&puzzle) {
            Ok(assembly) => println!("  puzzle: {assembly}"),
            Err(error) => {
                tracing::warn!(
                    "could not disassemble the puzzle of {}: {error}",
                    coin.coin_id()
                );
                println!("  puzzle: {puzzle}");
            }
        }
    }

    Ok(())
}
