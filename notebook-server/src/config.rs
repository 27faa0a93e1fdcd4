use std::path::PathBuf;

use clap::Parser;
use notebook_persistence::StorageConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "notebook", about = "Notebook workspace API server")]
pub struct ServerConfig {
  /// Directory holding the JSON record files.
  #[arg(long, env = "NOTEBOOK_DATA_DIR", default_value = "./data")]
  pub data_dir: PathBuf,

  #[arg(long, env = "NOTEBOOK_HOST", default_value = "0.0.0.0")]
  pub host: String,

  #[arg(long, env = "PORT", default_value_t = 8000)]
  pub port: u16,

  /// Write the JSON record files without indentation.
  #[arg(long, env = "NOTEBOOK_COMPACT_JSON", default_value_t = false)]
  pub compact_json: bool,
}

impl ServerConfig {
  pub fn storage_config(&self) -> StorageConfig {
    StorageConfig::new(&self.data_dir).pretty_json(!self.compact_json)
  }
}
