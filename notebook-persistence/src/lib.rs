pub use config::*;
pub use error::*;
pub use json_file::*;
pub use notebook_store::*;
pub use store::*;

mod config;
mod error;
mod json_file;
mod notebook_store;
mod store;
