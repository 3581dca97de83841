use chia_tx_driver::DriverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed transaction description: {0}")]
    MalformedDescription(String),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedDescription(error.to_string())
    }
}
