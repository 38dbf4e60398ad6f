use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MeasurementForm;

/// A persisted measurement form with its save timestamp.
///
/// The form is stored as an opaque serialized blob; nothing validates its
/// content on read, so a reloaded profile may hold partial text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProfile {
  pub form: MeasurementForm,
  pub saved_at: DateTime<Utc>,
}

impl SavedProfile {
  pub fn new(form: MeasurementForm) -> Self {
    Self {
      form,
      saved_at: Utc::now(),
    }
  }
}
