use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{ClientError, WalletRpcClient};

/// A [`WalletRpcClient`] that records every request and answers with canned responses.
#[derive(Debug)]
pub struct MockWalletRpcClient {
    requests: Mutex<Vec<(String, Value)>>,
    responses: HashMap<String, String>,
}

impl MockWalletRpcClient {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: HashMap::new(),
        }
    }

    pub fn mock_response(&mut self, url: &str, response: &str) {
        self.responses.insert(url.to_string(), response.to_string());
    }

    pub fn get_requests(&self) -> Vec<(String, Value)> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockWalletRpcClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletRpcClient for MockWalletRpcClient {
    fn base_url(&self) -> &str {
        "http://api.example.com"
    }

    async fn make_post_request<R, B>(&self, endpoint: &str, body: B) -> Result<R, ClientError>
    where
        B: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        let url = format!("{}/{}", self.base_url(), endpoint);
        let body = serde_json::to_value(body)
            .map_err(|error| ClientError::MalformedResponse(error.to_string()))?;

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((url.clone(), body));

        let response = self.responses.get(&url).ok_or_else(|| {
            ClientError::Rejected(format!("no mock response configured for {url}"))
        })?;

        serde_json::from_str(response)
            .map_err(|error| ClientError::MalformedResponse(error.to_string()))
    }
}
