mod args;
mod commands;
mod input;
mod summary;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Create(args) => commands::create(&args)?,
        Command::Verify(args) => commands::verify(&args)?,
        Command::Encode(args) => commands::encode(&args)?,
        Command::Decode(args) => commands::decode(&args)?,
        Command::Sign(args) => {
            let config = input::wallet_config(&cli.wallet)?;
            commands::sign(&args, &config).await?;
        }
        Command::Push(args) => {
            let config = input::wallet_config(&cli.wallet)?;
            commands::push(&args, &config).await?;
        }
        Command::ViewCoins(args) => {
            let config = input::wallet_config(&cli.wallet)?;
            commands::view_coins(&args, &config).await?;
        }
        Command::GetAddress(args) => {
            let config = input::wallet_config(&cli.wallet)?;
            commands::get_address(&args, &config).await?;
        }
    }

    Ok(())
}
