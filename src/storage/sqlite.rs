use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::Path;

use super::StorageError;
use crate::models::{MeasurementForm, SavedProfile};

/// SQLite-backed measurement store.
///
/// Single-profile layout: one row keyed `id = 1`, holding the raw form as a
/// JSON blob plus its save timestamp.
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Open (creating if needed) the database under the data directory and run
  /// migrations
  pub async fn open(data_dir: &Path) -> Result<Self, StorageError> {
    fs::create_dir_all(data_dir)?;
    let db_path = data_dir.join("proportion-coach.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePoolOptions::new()
      .max_connections(5)
      .connect(&db_url)
      .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Self { pool })
  }

  /// Wrap an existing pool (used by tests with an in-memory database)
  pub fn from_pool(pool: SqlitePool) -> Self {
    Self { pool }
  }

  pub async fn save(&self, form: &MeasurementForm) -> Result<(), StorageError> {
    let blob = serde_json::to_string(form)?;
    sqlx::query(
      r#"
      INSERT INTO measurement_profile (id, blob, saved_at)
      VALUES (1, ?1, ?2)
      ON CONFLICT(id) DO UPDATE SET blob = excluded.blob, saved_at = excluded.saved_at
      "#,
    )
    .bind(blob)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  pub async fn load(&self) -> Result<Option<SavedProfile>, StorageError> {
    let row: Option<(String, DateTime<Utc>)> =
      sqlx::query_as("SELECT blob, saved_at FROM measurement_profile WHERE id = 1")
        .fetch_optional(&self.pool)
        .await?;

    let Some((blob, saved_at)) = row else {
      return Ok(None);
    };

    // Fail closed: an unreadable blob behaves like an empty store
    match serde_json::from_str::<MeasurementForm>(&blob) {
      Ok(form) => Ok(Some(SavedProfile { form, saved_at })),
      Err(_) => Ok(None),
    }
  }

  pub async fn clear(&self) -> Result<(), StorageError> {
    sqlx::query("DELETE FROM measurement_profile WHERE id = 1")
      .execute(&self.pool)
      .await?;
    Ok(())
  }
}
