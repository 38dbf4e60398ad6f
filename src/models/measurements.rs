use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InputError {
  #[error("{0} is missing")]
  Missing(&'static str),

  #[error("{field} is not a valid number: {value:?}")]
  NotNumeric { field: &'static str, value: String },

  #[error("{0} must be a non-negative number")]
  Negative(&'static str),
}

/// ---------------------------------------------------------------------------
/// Field Metadata
/// ---------------------------------------------------------------------------

/// Display metadata for one measurement field
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MeasurementField {
  pub key: &'static str,
  pub label: &'static str,
  /// Anatomical landmarks for taking the measurement
  pub landmark: &'static str,
}

/// The six measurements, in input order. All are linear lengths in the same
/// unit (centimetres in the reference content; the core is unit-agnostic).
pub const MEASUREMENT_FIELDS: [MeasurementField; 6] = [
  MeasurementField { key: "height", label: "Height", landmark: "Standing height" },
  MeasurementField { key: "total-leg", label: "Total Leg", landmark: "Ankle to ASIS" },
  MeasurementField { key: "lower-leg", label: "Lower Leg", landmark: "Ankle to Knee" },
  MeasurementField { key: "wingspan", label: "Wingspan", landmark: "Fingertip to Fingertip" },
  MeasurementField { key: "lower-arm", label: "Lower Arm", landmark: "Wrist to Elbow" },
  MeasurementField { key: "upper-arm", label: "Upper Arm", landmark: "Collar Bone to Elbow" },
];

/// ---------------------------------------------------------------------------
/// Raw Input Form
/// ---------------------------------------------------------------------------

/// Raw measurement input, kept as the user typed it.
///
/// Fields stay string-typed up to the validation step so partial values
/// round-trip through persistence unchanged; parsing happens once, at
/// assessment time. This form is also the opaque blob the store persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementForm {
  pub height: String,
  pub total_leg: String,
  pub lower_leg: String,
  pub wingspan: String,
  pub lower_arm: String,
  pub upper_arm: String,
}

impl MeasurementForm {
  pub fn is_empty(&self) -> bool {
    self.fields().iter().all(|(_, v)| v.is_empty())
  }

  fn fields(&self) -> [(&'static str, &str); 6] {
    [
      ("height", self.height.as_str()),
      ("total leg", self.total_leg.as_str()),
      ("lower leg", self.lower_leg.as_str()),
      ("wingspan", self.wingspan.as_str()),
      ("lower arm", self.lower_arm.as_str()),
      ("upper arm", self.upper_arm.as_str()),
    ]
  }

  /// Validate and parse the form into numeric measurements.
  ///
  /// The caller-side contract the core relies on: every field must be
  /// non-empty and parse as a finite, non-negative number. The core itself
  /// never sees invalid input.
  pub fn parse(&self) -> Result<Measurements, InputError> {
    let mut values = [0.0_f64; 6];
    for (slot, (name, raw)) in values.iter_mut().zip(self.fields()) {
      *slot = parse_field(name, raw)?;
    }
    let [height, total_leg, lower_leg, wingspan, lower_arm, upper_arm] = values;
    Ok(Measurements {
      height,
      total_leg,
      lower_leg,
      wingspan,
      lower_arm,
      upper_arm,
    })
  }
}

fn parse_field(name: &'static str, raw: &str) -> Result<f64, InputError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(InputError::Missing(name));
  }
  let value: f64 = trimmed.parse().map_err(|_| InputError::NotNumeric {
    field: name,
    value: raw.to_string(),
  })?;
  if !value.is_finite() {
    return Err(InputError::NotNumeric {
      field: name,
      value: raw.to_string(),
    });
  }
  if value < 0.0 {
    return Err(InputError::Negative(name));
  }
  Ok(value)
}

/// ---------------------------------------------------------------------------
/// Parsed Measurements
/// ---------------------------------------------------------------------------

/// Six validated body-segment lengths, ready for the analysis core
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
  pub height: f64,
  pub total_leg: f64,
  pub lower_leg: f64,
  pub wingspan: f64,
  pub lower_arm: f64,
  pub upper_arm: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled_form() -> MeasurementForm {
    MeasurementForm {
      height: "180".into(),
      total_leg: "90".into(),
      lower_leg: "47".into(),
      wingspan: "183".into(),
      lower_arm: "27".into(),
      upper_arm: "34".into(),
    }
  }

  #[test]
  fn test_parse_valid_form() {
    let m = filled_form().parse().expect("form should parse");
    assert_eq!(m.height, 180.0);
    assert_eq!(m.upper_arm, 34.0);
  }

  #[test]
  fn test_parse_accepts_decimal_and_whitespace() {
    let mut form = filled_form();
    form.lower_leg = " 46.5 ".into();
    let m = form.parse().expect("form should parse");
    assert_eq!(m.lower_leg, 46.5);
  }

  #[test]
  fn test_parse_rejects_empty_field() {
    let mut form = filled_form();
    form.wingspan = "".into();
    assert_eq!(form.parse(), Err(InputError::Missing("wingspan")));
  }

  #[test]
  fn test_parse_rejects_non_numeric() {
    let mut form = filled_form();
    form.height = "tall".into();
    assert!(matches!(
      form.parse(),
      Err(InputError::NotNumeric { field: "height", .. })
    ));
  }

  #[test]
  fn test_parse_rejects_negative_and_non_finite() {
    let mut form = filled_form();
    form.lower_arm = "-3".into();
    assert_eq!(form.parse(), Err(InputError::Negative("lower arm")));

    let mut form = filled_form();
    form.lower_arm = "inf".into();
    assert!(matches!(form.parse(), Err(InputError::NotNumeric { .. })));
  }

  #[test]
  fn test_zero_is_valid_input() {
    // Degenerate but parseable; the core handles the arithmetic fallout
    let mut form = filled_form();
    form.upper_arm = "0".into();
    assert!(form.parse().is_ok());
  }

  #[test]
  fn test_default_form_is_empty() {
    assert!(MeasurementForm::default().is_empty());
    assert!(!filled_form().is_empty());
  }

  #[test]
  fn test_form_round_trips_partial_text() {
    // A partial value like "12." must survive serialization untouched
    let mut form = MeasurementForm::default();
    form.height = "12.".into();
    let json = serde_json::to_string(&form).expect("serialize");
    let back: MeasurementForm = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, form);
  }
}
