use std::path::{Path, PathBuf};

/// Where and how the record families are written.
#[derive(Debug, Clone)]
pub struct StorageConfig {
  /// Directory holding one `<family>.json` file per record family.
  /// Default is `./data`.
  pub data_dir: PathBuf,
  /// Write indented JSON. Default is `true`.
  pub pretty_json: bool,
}

impl StorageConfig {
  pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
    Self {
      data_dir: data_dir.as_ref().to_path_buf(),
      ..Self::default()
    }
  }

  pub fn pretty_json(mut self, pretty_json: bool) -> Self {
    self.pretty_json = pretty_json;
    self
  }

  pub fn family_path(&self, family: &str) -> PathBuf {
    self.data_dir.join(format!("{}.json", family))
  }
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      data_dir: PathBuf::from("./data"),
      pretty_json: true,
    }
  }
}
