pub use chia_bls::{PublicKey, Signature};
pub use chia_protocol::{Bytes32, Coin, Program};
pub use clvm_traits::{FromClvm, ToClvm};
pub use clvm_utils::{ToTreeHash, TreeHash};
pub use clvmr::{Allocator, NodePtr};

pub use chia_tx_client::{ClientError, HttpWalletClient, WalletRpcClient, WalletRpcConfig};
pub use chia_tx_driver::{
    assemble, create_unsigned_transaction, decode_spend_bundle, decode_spend_bundle_hex,
    encode_spend_bundle, encode_spend_bundle_hex, inspect_spend_bundle, verify_spend_bundle,
    BundleSummary, DriverError, SpendAuthority, SpendContext, SpendInput,
};
pub use chia_tx_parser::{parse_transaction, spend_bundle_to_json, ParseError};
pub use chia_tx_types::{
    build_solution, CoinSolution, Condition, Conditions, SpendAssertions, SpendBundle, SpendRequest,
};
