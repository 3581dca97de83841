use anyhow::Result;
use chia_tx::{driver, parser};

use crate::{args::TransactionArgs, input::read_argument, summary::format_summary};

pub fn create(args: &TransactionArgs) -> Result<()> {
    let spend_bundle = parser::parse_transaction(&read_argument(&args.json)?)?;

    let summary = driver::inspect_spend_bundle(&spend_bundle)?;
    tracing::info!("created spend bundle\n{}", format_summary(&summary));

    println!("{}", driver::encode_spend_bundle_hex(&spend_bundle)?);

    Ok(())
}
