//! Runtime configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `SHELF_*` environment variables, each layer overriding the previous one.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Path value that selects an in-memory store instead of a file.
pub const IN_MEMORY: &str = ":memory:";

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file, or `:memory:`.
  pub store_path: PathBuf,
}

impl ServerConfig {
  /// Layer defaults, the optional file at `path`, and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::load_with_env(path, config::Environment::with_prefix("SHELF"))
  }

  fn load_with_env(
    path: &Path,
    env:  config::Environment,
  ) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("store_path", "shelf.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `true` when `store_path` asks for an in-memory store.
  pub fn in_memory(&self) -> bool { self.store_path.as_os_str() == IN_MEMORY }

  /// `store_path` with a leading `~/` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf {
    expand_tilde(&self.store_path, std::env::var("HOME").ok().as_deref())
  }
}

/// Expand a leading `~` to `home`, when one is known.
fn expand_tilde(path: &Path, home: Option<&str>) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Some(home) = home
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
