//! Layered runtime configuration.
//!
//! Precedence, lowest to highest: built-in defaults, the TOML file,
//! `RACI_*` environment variables, command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "raci.db";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// SQLite database file holding the matrix.
  pub db_path:  PathBuf,
  /// Where to write logs while the terminal UI owns the screen.
  #[serde(default)]
  pub log_file: Option<PathBuf>,
}

impl Settings {
  /// Load settings from `file` (if it exists) and the environment, then apply
  /// `db_override` from the command line.
  pub fn load(file: &Path, db_override: Option<&Path>) -> anyhow::Result<Self> {
    let mut builder = config::Config::builder()
      .set_default("db_path", DEFAULT_DB_PATH)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("RACI"));

    if let Some(db) = db_override {
      builder = builder.set_override("db_path", db.to_string_lossy().into_owned())?;
    }

    let settings: Settings = builder
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")?;

    Ok(Settings {
      db_path:  expand_tilde(&settings.db_path),
      log_file: settings.log_file.as_deref().map(expand_tilde),
    })
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
