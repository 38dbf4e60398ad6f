use std::fs;
use std::path::{Path, PathBuf};

use super::StorageError;
use crate::models::{MeasurementForm, SavedProfile};

/// Flat-file measurement store: one JSON document in the data directory.
///
/// Fallback backend for environments without SQLite state, mirroring the
/// single-blob shape of the SQLite store.
pub struct FileStore {
  path: PathBuf,
}

impl FileStore {
  pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
    fs::create_dir_all(data_dir)?;
    Ok(Self {
      path: data_dir.join("measurements.json"),
    })
  }

  pub fn save(&self, form: &MeasurementForm) -> Result<(), StorageError> {
    let profile = SavedProfile::new(form.clone());
    let blob = serde_json::to_string_pretty(&profile)?;
    fs::write(&self.path, blob)?;
    Ok(())
  }

  pub fn load(&self) -> Result<Option<SavedProfile>, StorageError> {
    let blob = match fs::read_to_string(&self.path) {
      Ok(blob) => blob,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    // Fail closed: an unreadable blob behaves like an empty store
    Ok(serde_json::from_str(&blob).ok())
  }

  pub fn clear(&self) -> Result<(), StorageError> {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}
