mod client_error;
mod config;
mod de;
mod http_wallet_client;
mod mock_client;
mod models;
mod wallet_rpc_client;

pub use client_error::*;
pub use config::*;
pub use http_wallet_client::*;
pub use mock_client::*;
pub use models::*;
pub use wallet_rpc_client::*;
