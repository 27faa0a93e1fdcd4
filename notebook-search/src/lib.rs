pub use engine::*;
pub use entities::*;
pub use error::*;

mod engine;
mod entities;
mod error;
mod highlight;
