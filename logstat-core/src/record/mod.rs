mod error;
mod method;
mod parse;
mod types;


pub use error::*;
pub use method::*;
pub use parse::*;
pub use types::*;
