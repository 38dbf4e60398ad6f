//! Persistence collaborator for raw measurement forms
//!
//! The store is selected once at startup from configuration and injected
//! into the command layer; the analysis core never touches storage. Forms
//! are persisted as opaque serialized blobs with no validation on read:
//! a corrupt or partial blob fails closed to the empty default.

pub mod file;
pub mod sqlite;

use thiserror::Error;

use crate::config::{AppConfig, StorageBackend};
use crate::models::{MeasurementForm, SavedProfile};

#[derive(Error, Debug)]
pub enum StorageError {
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("storage I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

/// The injected store, one variant per configured backend
pub enum MeasurementStore {
  Sqlite(sqlite::SqliteStore),
  File(file::FileStore),
}

impl MeasurementStore {
  /// Open the backend named by the configuration
  pub async fn from_config(config: &AppConfig) -> Result<Self, StorageError> {
    match config.backend {
      StorageBackend::Sqlite => {
        Ok(Self::Sqlite(sqlite::SqliteStore::open(&config.data_dir).await?))
      }
      StorageBackend::File => Ok(Self::File(file::FileStore::open(&config.data_dir)?)),
    }
  }

  /// Persist the raw form, replacing any previous save
  pub async fn save(&self, form: &MeasurementForm) -> Result<(), StorageError> {
    match self {
      Self::Sqlite(store) => store.save(form).await,
      Self::File(store) => store.save(form),
    }
  }

  /// Load the last saved form. Returns `None` when nothing was saved or the
  /// stored blob does not deserialize.
  pub async fn load(&self) -> Result<Option<SavedProfile>, StorageError> {
    match self {
      Self::Sqlite(store) => store.load().await,
      Self::File(store) => store.load(),
    }
  }

  /// Remove the saved form, if any
  pub async fn clear(&self) -> Result<(), StorageError> {
    match self {
      Self::Sqlite(store) => store.clear().await,
      Self::File(store) => store.clear(),
    }
  }
}
