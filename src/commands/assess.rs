use crate::analysis;
use crate::models::MeasurementForm;
use crate::report;
use crate::storage::MeasurementStore;

use super::Assessment;

/// Validate the raw form, run the pipeline, and render the report.
///
/// Validation happens here, before the core is invoked: the pipeline only
/// ever sees six finite non-negative numbers.
pub fn run_pipeline(form: &MeasurementForm, json: bool) -> Result<String, String> {
  let measurements = form.parse().map_err(|e| report::validation_failure(&e))?;
  let (results, classifications) = analysis::assess(&measurements);

  if json {
    let assessment = Assessment {
      measurements,
      results,
      classifications,
    };
    Ok(assessment.to_json())
  } else {
    Ok(report::render_report(&results, &classifications))
  }
}

/// Assess a form and persist it on success.
///
/// Invalid input is rejected before anything is saved; a storage failure
/// after a successful assessment is reported but does not discard the report.
pub async fn assess_and_save(
  store: &MeasurementStore,
  form: &MeasurementForm,
  json: bool,
) -> Result<String, String> {
  let rendered = run_pipeline(form, json)?;

  if let Err(e) = store.save(form).await {
    eprintln!("Warning: failed to save measurements: {}", e);
  }

  Ok(rendered)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::sample_form;

  #[test]
  fn test_pipeline_renders_report() {
    let text = run_pipeline(&sample_form(), false).expect("valid form");
    assert!(text.contains("Your Analysis Results"));
    assert!(text.contains("Lower Body Recommendations"));
  }

  #[test]
  fn test_pipeline_json_output_carries_classification_key() {
    let json = run_pipeline(&sample_form(), true).expect("valid form");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["classifications"]["leg_strategy"], "long");
    assert_eq!(value["classifications"]["arm_strategy"], "long");
    assert_eq!(value["results"]["femur_length"], 43.0);
  }

  #[test]
  fn test_pipeline_rejects_incomplete_form() {
    let mut form = sample_form();
    form.height = String::new();
    let err = run_pipeline(&form, false).expect_err("should reject");
    assert!(err.contains("fill in all measurements"));
  }
}
