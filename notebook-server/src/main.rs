use clap::Parser;
use notebook_persistence::NotebookStore;
use notebook_server::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv::dotenv().ok();
  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::new(
      std::env::var("RUST_LOG").unwrap_or_else(|_| "notebook=debug,tower_http=debug".into()),
    ))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = ServerConfig::parse();
  let store = NotebookStore::open(&config.storage_config());
  store.init().await?;
  info!("data directory: {}", config.data_dir.display());

  let app = notebook_server::app(AppState::new(&store));
  let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
  info!("listening on {}", listener.local_addr()?);
  axum::serve(listener, app).await?;
  Ok(())
}
