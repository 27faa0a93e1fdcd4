use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::*;
pub use error::*;
pub use extract::*;
pub use state::*;

mod config;
mod error;
mod extract;
mod state;

pub mod routes;

/// Every endpoint of the notebook API over `state`, with CORS open to any
/// origin and request tracing.
pub fn app(state: SharedState) -> Router {
  let cors = CorsLayer::new()
    .allow_methods(Any)
    .allow_headers(Any)
    .allow_origin(Any);

  routes::router()
    .with_state(state)
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}
