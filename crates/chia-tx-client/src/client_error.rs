use chia_tx_driver::DriverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("wallet rejected the request: {0}")]
    Rejected(String),

    #[error("malformed wallet response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Driver(#[from] DriverError),
}
