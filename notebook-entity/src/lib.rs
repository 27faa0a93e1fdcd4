pub use activity::*;
pub use block::*;
pub use comment::*;
pub use error::*;
pub use page::*;
pub use share::*;
pub use user::*;

mod activity;
mod block;
mod comment;
mod error;
mod page;
mod share;
mod user;

pub mod define;
pub mod util;
