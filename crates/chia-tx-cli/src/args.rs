use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Create, inspect, sign and push raw Chia transactions.
#[derive(Debug, Parser)]
#[command(name = "chia-tx", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

/// Where to reach the wallet's RPC server. Flags take precedence over the config file.
#[derive(Debug, Args)]
pub struct WalletArgs {
    /// A JSON file with `scheme`, `host` and `port` keys.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub scheme: Option<String>,

    #[arg(long, global = true, env = "CHIA_TX_WALLET_HOST")]
    pub host: Option<String>,

    /// Only parsed by the commands that talk to the wallet.
    #[arg(long, global = true, env = "CHIA_TX_WALLET_PORT")]
    pub port: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build an unsigned spend bundle from a JSON description and print its hex encoding.
    Create(TransactionArgs),
    /// Decode a hex spend bundle and check that it is consistent.
    Verify(BundleArgs),
    /// Build a spend bundle from a JSON description and have the wallet sign it.
    Sign(TransactionArgs),
    /// Build, sign and push a spend bundle from a JSON description.
    Push(TransactionArgs),
    /// Print only the hex encoding of the spend bundle described by a JSON description.
    Encode(TransactionArgs),
    /// Print a hex spend bundle as JSON.
    Decode(BundleArgs),
    /// List the coins the wallet can spend.
    ViewCoins(WalletIdArgs),
    /// Print the wallet's next receive address.
    GetAddress(WalletIdArgs),
}

#[derive(Debug, Args)]
pub struct TransactionArgs {
    /// The JSON transaction description, or `@path` to read it from a file.
    pub json: String,
}

#[derive(Debug, Args)]
pub struct BundleArgs {
    /// The hex encoded spend bundle, or `@path` to read it from a file.
    pub hex: String,
}

#[derive(Debug, Args)]
pub struct WalletIdArgs {
    #[arg(long, default_value_t = 1)]
    pub wallet_id: u32,
}
