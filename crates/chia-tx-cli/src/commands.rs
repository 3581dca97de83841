mod create;
mod decode;
mod encode;
mod get_address;
mod push;
mod sign;
mod verify;
mod view_coins;

pub use create::*;
pub use decode::*;
pub use encode::*;
pub use get_address::*;
pub use push::*;
pub use sign::*;
pub use verify::*;
pub use view_coins::*;
