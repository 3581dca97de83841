pub use chia_tx_client as client;
pub use chia_tx_driver as driver;
pub use chia_tx_parser as parser;
pub use chia_tx_types as types;

pub mod prelude;
