use anyhow::Result;
use chia_tx::{driver, parser};

use crate::{args::BundleArgs, input::read_argument};

pub fn decode(args: &BundleArgs) -> Result<()> {
    let spend_bundle = driver::decode_spend_bundle_hex(&read_argument(&args.hex)?)?;

    println!("{}", parser::spend_bundle_to_json(&spend_bundle)?);

    Ok(())
}
