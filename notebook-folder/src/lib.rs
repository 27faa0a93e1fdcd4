pub use error::*;
pub use filter::*;
pub use folder::*;

mod error;
mod filter;
mod folder;
