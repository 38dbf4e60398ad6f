use crate::storage::MeasurementStore;

use super::assess::run_pipeline;

/// Re-run the report from the last saved measurements.
///
/// A saved blob is not validated on write, so the reloaded form goes through
/// the same validation gate as fresh input; a partial form saved by an older
/// session reports the usual validation failure rather than crashing.
pub async fn show_saved(store: &MeasurementStore, json: bool) -> Result<String, String> {
  let profile = store
    .load()
    .await
    .map_err(|e| format!("Failed to load saved measurements: {}", e))?;

  let Some(profile) = profile else {
    return Ok("No saved measurements. Run `assess` first.".to_string());
  };

  let mut out = format!("Saved {}\n\n", profile.saved_at.format("%Y-%m-%d %H:%M UTC"));
  out.push_str(&run_pipeline(&profile.form, json)?);
  Ok(out)
}

/// Clear the saved measurements
pub async fn reset(store: &MeasurementStore) -> Result<String, String> {
  store
    .clear()
    .await
    .map_err(|e| format!("Failed to clear saved measurements: {}", e))?;
  Ok("Saved measurements cleared.".to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::storage::sqlite::SqliteStore;
  use crate::storage::MeasurementStore;
  use crate::test_utils::{sample_form, setup_test_db};

  async fn test_store() -> MeasurementStore {
    MeasurementStore::Sqlite(SqliteStore::from_pool(setup_test_db().await))
  }

  #[tokio::test]
  async fn test_show_without_save_reports_empty() {
    let store = test_store().await;
    let text = show_saved(&store, false).await.expect("show should succeed");
    assert!(text.contains("No saved measurements"));
  }

  #[tokio::test]
  async fn test_show_after_save_renders_report() {
    let store = test_store().await;
    store.save(&sample_form()).await.expect("save");
    let text = show_saved(&store, false).await.expect("show should succeed");
    assert!(text.contains("Saved "));
    assert!(text.contains("Your Analysis Results"));
  }

  #[tokio::test]
  async fn test_reset_then_show_is_empty() {
    let store = test_store().await;
    store.save(&sample_form()).await.expect("save");
    reset(&store).await.expect("reset");
    let text = show_saved(&store, false).await.expect("show should succeed");
    assert!(text.contains("No saved measurements"));
  }
}
