mod error;
pub use error::*;
mod spec;
pub use spec::*;
mod parse;
pub use parse::*;
mod value;
pub use value::*;

#[cfg(feature = "help")]
mod help;

mod util;
pub use util::*;
