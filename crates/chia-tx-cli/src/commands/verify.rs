use anyhow::Result;
use chia_tx::driver;

use crate::{args::BundleArgs, input::read_argument, summary::format_summary};

pub fn verify(args: &BundleArgs) -> Result<()> {
    let spend_bundle = driver::decode_spend_bundle_hex(&read_argument(&args.hex)?)?;
    let summary = driver::verify_spend_bundle(&spend_bundle)?;

    println!("{}", format_summary(&summary));

    if spend_bundle.is_unsigned() {
        println!("the spend bundle has not been signed yet");
    }

    Ok(())
}
