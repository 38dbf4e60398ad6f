//! Command handlers the CLI dispatches to
//!
//! Each handler owns one user-facing operation against the injected store.
//! Errors surface as displayable strings; the handlers never panic.

pub mod assess;
pub mod profile;

use serde::Serialize;

use crate::analysis::{CalculatedResults, Classifications};
use crate::models::Measurements;

/// One full assessment, serialized as the `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
  pub measurements: Measurements,
  pub results: CalculatedResults,
  pub classifications: Classifications,
}

impl Assessment {
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}
