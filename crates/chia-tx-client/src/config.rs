use serde::Deserialize;

/// Where the wallet's RPC server listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalletRpcConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl WalletRpcConfig {
    pub const DEFAULT_PORT: u16 = 9256;

    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl Default for WalletRpcConfig {
    fn default() -> Self {
        Self::new("http", "127.0.0.1", Self::DEFAULT_PORT)
    }
}
