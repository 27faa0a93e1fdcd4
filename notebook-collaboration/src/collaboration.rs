use notebook_persistence::NotebookStore;

use crate::{Activities, Comments, Shares, Users};

/// Comments, shares, notifications and users over one [NotebookStore].
/// Comments and shares write their notifications through `activities`.
#[derive(Clone)]
pub struct Collaboration {
  pub comments: Comments,
  pub shares: Shares,
  pub activities: Activities,
  pub users: Users,
}

impl Collaboration {
  pub fn new(store: &NotebookStore) -> Self {
    let activities = Activities::new(store);
    Self {
      comments: Comments::from_store(store.comments.clone(), activities.clone()),
      shares: Shares::from_store(store.shares.clone(), activities.clone()),
      users: Users::new(store),
      activities,
    }
  }
}
