mod bundle_json;
mod de;
mod description;
mod parse_error;
mod parser;

pub use bundle_json::*;
pub use description::*;
pub use parse_error::*;
pub use parser::*;
