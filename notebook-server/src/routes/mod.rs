use axum::Router;

use crate::SharedState;

pub mod activities;
pub mod blocks;
pub mod comments;
pub mod pages;
pub mod search;
pub mod service;
pub mod shares;
pub mod users;

pub fn router() -> Router<SharedState> {
  Router::new()
    .merge(service::routes())
    .merge(blocks::routes())
    .merge(pages::routes())
    .merge(comments::routes())
    .merge(shares::routes())
    .merge(activities::routes())
    .merge(search::routes())
    .merge(users::routes())
}
