pub use blocks::*;
pub use error::*;

mod blocks;
mod error;
