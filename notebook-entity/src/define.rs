use chrono::{DateTime, Utc};
use nanoid::nanoid;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub type PageId = String;
pub type BlockId = String;
pub type CommentId = String;
pub type ShareId = String;
pub type ActivityId = String;
pub type UserId = String;

// Record families. Each one is persisted as a single JSON array.
pub const PAGES: &str = "pages";
pub const BLOCKS: &str = "blocks";
pub const COMMENTS: &str = "comments";
pub const SHARES: &str = "shares";
pub const ACTIVITIES: &str = "activities";
pub const USERS: &str = "users";

/// A record that lives in one of the notebook's flat collections.
///
/// `FAMILY` names the collection the record belongs to and doubles as the
/// stem of the file it is persisted in.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
  const FAMILY: &'static str;

  fn id(&self) -> &str;
}

pub fn timestamp() -> DateTime<Utc> {
  Utc::now()
}

/// Identifier for pages, comments, shares and activities.
pub fn generate_id() -> String {
  Uuid::new_v4().to_string()
}

pub fn generate_block_id() -> BlockId {
  nanoid!(10)
}
