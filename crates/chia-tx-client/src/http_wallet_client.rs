use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::{ClientError, WalletRpcClient, WalletRpcConfig};

/// Talks to the wallet's RPC server over plain HTTP JSON requests.
#[derive(Debug)]
pub struct HttpWalletClient {
    base_url: String,
    client: Client,
}

impl HttpWalletClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &WalletRpcConfig) -> Self {
        Self::new(config.base_url())
    }
}

impl Default for HttpWalletClient {
    fn default() -> Self {
        Self::from_config(&WalletRpcConfig::default())
    }
}

impl WalletRpcClient for HttpWalletClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn make_post_request<R, B>(&self, endpoint: &str, body: B) -> Result<R, ClientError>
    where
        B: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        let url = format!("{}/{}", self.base_url(), endpoint);
        tracing::debug!("posting to {url}");

        let res = self.client.post(&url).json(&body).send().await?;
        let text = res.text().await?;

        serde_json::from_str(&text)
            .map_err(|error| ClientError::MalformedResponse(error.to_string()))
    }
}
