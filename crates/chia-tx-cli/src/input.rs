use std::fs;

use anyhow::{Context, Result};
use chia_tx::client::WalletRpcConfig;

use crate::args::WalletArgs;

/// Arguments starting with `@` name a file to read the value from.
pub fn read_argument(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => Ok(value.to_string()),
    }
}

pub fn wallet_config(args: &WalletArgs) -> Result<WalletRpcConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid wallet config {}", path.display()))?
        }
        None => WalletRpcConfig::default(),
    };

    if let Some(scheme) = &args.scheme {
        config.scheme.clone_from(scheme);
    }

    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }

    if let Some(port) = &args.port {
        config.port = port
            .parse()
            .with_context(|| format!("invalid wallet port {port:?}"))?;
    }

    tracing::debug!("using wallet rpc at {}", config.base_url());

    Ok(config)
}
