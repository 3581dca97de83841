use anyhow::Result;
use chia_tx::{driver, parser};

use crate::{args::TransactionArgs, input::read_argument};

pub fn encode(args: &TransactionArgs) -> Result<()> {
    let spend_bundle = parser::parse_transaction(&read_argument(&args.json)?)?;

    println!("{}", driver::encode_spend_bundle_hex(&spend_bundle)?);

    Ok(())
}
