//! Runtime configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file passed
//! with `--config`, `DAYS_*` environment variables, then explicit
//! [`Overrides`] (CLI flags and the legacy `PORT` / `DB_PATH` variables).

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STORE_PATH: &str = "./data/journal.db";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file; its parent directory is created on startup.
  pub store_path: PathBuf,
  /// Directory of frontend assets served for every non-API path.
  #[serde(default)]
  pub static_dir: Option<PathBuf>,
}

/// Values that win over every other configuration source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub port:       Option<u16>,
  pub store_path: Option<PathBuf>,
  pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
  /// Load configuration from `file` (optional on disk), the environment and
  /// `overrides`. A leading `~` in paths is expanded.
  pub fn load(file: &Path, overrides: &Overrides) -> Result<Self, config::ConfigError> {
    let path_value =
      |p: &Option<PathBuf>| p.as_ref().map(|p| p.to_string_lossy().into_owned());

    let settings = config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("DAYS"))
      .set_override_option("port", overrides.port.map(i64::from))?
      .set_override_option("store_path", path_value(&overrides.store_path))?
      .set_override_option("static_dir", path_value(&overrides.static_dir))?
      .build()?;

    let mut cfg: ServerConfig = settings.try_deserialize()?;
    cfg.store_path = expand_tilde(&cfg.store_path);
    cfg.static_dir = cfg.static_dir.as_deref().map(expand_tilde);
    Ok(cfg)
  }

  /// `host:port` to bind.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
