//! Test utilities and fixtures shared by unit and integration tests

use sqlx::SqlitePool;

use crate::models::MeasurementForm;

/// Create an in-memory SQLite database with migrations applied.
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases.
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// A fully valid form: long legs and tibia, average arms and ulna, which
/// resolves to long/long strategies
pub fn sample_form() -> MeasurementForm {
  form(&["180", "90", "47", "183", "27", "34"])
}

/// Build a form from the six raw values in input order
pub fn form(values: &[&str; 6]) -> MeasurementForm {
  MeasurementForm {
    height: values[0].to_string(),
    total_leg: values[1].to_string(),
    lower_leg: values[2].to_string(),
    wingspan: values[3].to_string(),
    lower_arm: values[4].to_string(),
    upper_arm: values[5].to_string(),
  }
}
