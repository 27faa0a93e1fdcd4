pub use activities::*;
pub use collaboration::*;
pub use comments::*;
pub use error::*;
pub use shares::*;
pub use users::*;

mod activities;
mod collaboration;
mod comments;
mod error;
mod shares;
mod users;
