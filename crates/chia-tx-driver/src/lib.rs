mod assembler;
mod codec;
mod driver_error;
mod inspect;
mod layer;
mod layers;
mod network;
mod spend;
mod spend_authority;
mod spend_context;

pub use assembler::*;
pub use codec::*;
pub use driver_error::*;
pub use inspect::*;
pub use layer::*;
pub use layers::*;
pub use network::*;
pub use spend::*;
pub use spend_authority::*;
pub use spend_context::*;
