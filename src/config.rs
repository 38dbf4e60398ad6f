use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("unknown storage backend {0:?} (expected \"sqlite\" or \"file\")")]
  UnknownBackend(String),

  #[error("cannot determine a data directory; set PROPORTION_DATA_DIR")]
  MissingDataDir,
}

/// Which persistence implementation to inject at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Sqlite,
  File,
}

/// Application configuration, read once from the environment.
///
/// `.env` is loaded by `main` before this runs.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub backend: StorageBackend,
  pub data_dir: PathBuf,
}

impl AppConfig {
  /// Read configuration from `PROPORTION_STORE` and `PROPORTION_DATA_DIR`.
  /// Defaults: sqlite backend, `~/.proportion-coach`.
  pub fn from_env() -> Result<Self, ConfigError> {
    let backend = match env::var("PROPORTION_STORE") {
      Ok(value) => match value.as_str() {
        "sqlite" => StorageBackend::Sqlite,
        "file" => StorageBackend::File,
        other => return Err(ConfigError::UnknownBackend(other.to_string())),
      },
      Err(_) => StorageBackend::Sqlite,
    };

    let data_dir = match env::var("PROPORTION_DATA_DIR") {
      Ok(dir) => PathBuf::from(dir),
      Err(_) => env::var("HOME")
        .map(|home| PathBuf::from(home).join(".proportion-coach"))
        .map_err(|_| ConfigError::MissingDataDir)?,
    };

    Ok(Self { backend, data_dir })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_defaults_to_sqlite_in_home() {
    temp_env::with_vars(
      [
        ("PROPORTION_STORE", None::<&str>),
        ("PROPORTION_DATA_DIR", None),
        ("HOME", Some("/home/athlete")),
      ],
      || {
        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(config.backend, StorageBackend::Sqlite);
        assert_eq!(config.data_dir, PathBuf::from("/home/athlete/.proportion-coach"));
      },
    );
  }

  #[test]
  #[serial]
  fn test_explicit_file_backend_and_dir() {
    temp_env::with_vars(
      [
        ("PROPORTION_STORE", Some("file")),
        ("PROPORTION_DATA_DIR", Some("/tmp/pc-data")),
      ],
      || {
        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pc-data"));
      },
    );
  }

  #[test]
  #[serial]
  fn test_unknown_backend_is_rejected() {
    temp_env::with_vars([("PROPORTION_STORE", Some("redis"))], || {
      assert!(matches!(
        AppConfig::from_env(),
        Err(ConfigError::UnknownBackend(_))
      ));
    });
  }
}
