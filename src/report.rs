//! Terminal rendering of assessment reports
//!
//! Display rounding to one decimal place happens here and only here; the
//! analysis core carries full-precision values.

use std::fmt::Write;

use crate::analysis::{CalculatedResults, Classifications, SegmentClass};
use crate::catalog::{
  self, ActivationTiers, LiftingInsight, RecommendationCategory,
};
use crate::models::{InputError, MEASUREMENT_FIELDS};

/// The user-visible rejection message for the input validation contract
pub fn validation_failure(err: &InputError) -> String {
  format!("Please fill in all measurements with valid numbers ({}).", err)
}

fn badge(class: SegmentClass) -> String {
  format!("[{}]", class.as_str().to_uppercase())
}

/// ---------------------------------------------------------------------------
/// Results Section
/// ---------------------------------------------------------------------------

pub fn render_results(r: &CalculatedResults, c: &Classifications) -> String {
  let mut out = String::new();

  let _ = writeln!(out, "Your Analysis Results");
  let _ = writeln!(out, "---------------------");
  let _ = writeln!(
    out,
    "Femur Length        {:>8.1} cm   Total Leg minus Lower Leg",
    r.femur_length
  );
  let _ = writeln!(
    out,
    "Tibia:Femur Ratio   {:>8.1} %    {} tibia, {}",
    r.tibia_femur_ratio,
    badge(c.tibia),
    catalog::tibia_range_text(c.tibia)
  );
  let _ = writeln!(
    out,
    "Leg:Height Ratio    {:>8.1} %    {} legs, {}",
    r.leg_height_ratio,
    badge(c.legs),
    catalog::legs_range_text(c.legs)
  );
  let _ = writeln!(
    out,
    "Wingspan - Height   {:>+8.1} cm   {} arms, {}",
    r.wingspan_minus_height,
    badge(c.arms),
    catalog::arms_range_text(c.arms)
  );
  let _ = writeln!(
    out,
    "Ulna:Humerus Ratio  {:>8.1} %    {} ulna, {}",
    r.ulna_humerus_ratio,
    badge(c.ulna),
    catalog::ulna_range_text(c.ulna)
  );

  let legs = catalog::leg_strategy_profile(c.leg_strategy);
  let arms = catalog::arm_strategy_profile(c.arm_strategy);
  let _ = writeln!(out);
  let _ = writeln!(out, "Lower Body Strategy: {}", legs.headline);
  let _ = writeln!(out, "  Advantage:    {}", legs.advantage);
  let _ = writeln!(out, "  Disadvantage: {}", legs.disadvantage);
  let _ = writeln!(out, "Upper Body Strategy: {}", arms.headline);
  let _ = writeln!(out, "  Advantage:    {}", arms.advantage);
  let _ = writeln!(out, "  Disadvantage: {}", arms.disadvantage);

  out
}

/// ---------------------------------------------------------------------------
/// Activation and Insights
/// ---------------------------------------------------------------------------

fn render_tiers(out: &mut String, title: &str, tiers: &ActivationTiers) {
  let _ = writeln!(out, "  {}", title);
  let _ = writeln!(out, "    Easy to Activate:      {}", tiers.easy.join(", "));
  let _ = writeln!(out, "    Neutral:               {}", tiers.neutral.join(", "));
  let _ = writeln!(out, "    Difficult to Activate: {}", tiers.difficult.join(", "));
}

fn render_insights(out: &mut String, title: &str, insights: &[LiftingInsight]) {
  let _ = writeln!(out, "  {}", title);
  for insight in insights {
    let _ = writeln!(out, "    {}: {}", insight.phase, insight.detail);
    if let Some(url) = insight.video_url {
      let _ = writeln!(out, "      Watch: {}", url);
    }
  }
}

pub fn render_analysis_extras(c: &Classifications) -> String {
  let mut out = String::new();

  let (leg_tiers, arm_tiers) = catalog::activation_hierarchy(c);
  let _ = writeln!(out, "Activation Hierarchy");
  let _ = writeln!(out, "--------------------");
  render_tiers(&mut out, "Lower Body", &leg_tiers);
  render_tiers(&mut out, "Upper Body", &arm_tiers);

  let (leg_insights, arm_insights) = catalog::lifting_insights(c);
  let _ = writeln!(out);
  let _ = writeln!(out, "Olympic Lifting Insights");
  let _ = writeln!(out, "------------------------");
  render_insights(&mut out, "Lower Body", leg_insights);
  render_insights(&mut out, "Upper Body", arm_insights);

  out
}

/// ---------------------------------------------------------------------------
/// Recommendations
/// ---------------------------------------------------------------------------

pub fn render_category(set: &RecommendationCategory) -> String {
  let mut out = String::new();

  let _ = writeln!(out, "{}", set.title);
  let _ = writeln!(out, "{}", "-".repeat(set.title.len()));
  let _ = writeln!(out, "{}", set.description);

  for category in set.categories {
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", category.title);
    let _ = writeln!(out, "    Strategy: {}", category.strategy);
    let _ = writeln!(out, "    Examples: {}", category.examples.join(", "));
    if let Some(url) = category.video_url {
      let _ = writeln!(out, "    Watch: {}", url);
    }
    if let Some(notes) = category.notes {
      let _ = writeln!(out, "    Notes: {}", notes);
    }
  }

  let _ = writeln!(out);
  let _ = writeln!(out, "  Mobility Considerations");
  let _ = writeln!(out, "    Tight/Overactive: {}", set.mobility.tight_overactive.join(", "));
  let _ = writeln!(out, "    Weak/Underactive: {}", set.mobility.weak_underactive.join(", "));
  let _ = writeln!(out, "    Common Symptoms:  {}", set.mobility.symptoms.join("; "));
  let _ = writeln!(out, "    Prehab Focus:     {}", set.mobility.prehab.join(", "));

  out
}

pub fn render_recommendations(c: &Classifications) -> String {
  let sections = [
    catalog::leg_recommendations(c.leg_strategy),
    catalog::push_recommendations(c.arm_strategy),
    catalog::pull_recommendations(c.arm_strategy),
  ];
  sections.map(render_category).join("\n")
}

/// The full report: results, strategies, activation, insights, content
pub fn render_report(r: &CalculatedResults, c: &Classifications) -> String {
  [
    render_results(r, c),
    render_analysis_extras(c),
    render_recommendations(c),
  ]
  .join("\n")
}

/// ---------------------------------------------------------------------------
/// Field Help
/// ---------------------------------------------------------------------------

pub fn fields_help() -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Enter all measurements in centimetres.");
  for field in MEASUREMENT_FIELDS {
    let _ = writeln!(out, "  --{:<10} {} ({})", field.key, field.label, field.landmark);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::assess;
  use crate::models::Measurements;

  fn sample() -> (CalculatedResults, Classifications) {
    assess(&Measurements {
      height: 180.0,
      total_leg: 90.0,
      lower_leg: 47.0,
      wingspan: 183.0,
      lower_arm: 27.0,
      upper_arm: 34.0,
    })
  }

  #[test]
  fn test_results_rounded_to_one_decimal() {
    let (r, c) = sample();
    let text = render_results(&r, &c);
    assert!(text.contains("109.3"), "unrounded ratio leaked: {}", text);
    assert!(!text.contains("109.30"));
    assert!(text.contains("[LONG] tibia"));
    assert!(text.contains("85%+ of femur"));
  }

  #[test]
  fn test_wingspan_difference_is_signed() {
    let (r, c) = sample();
    let text = render_results(&r, &c);
    assert!(text.contains("+3.0 cm"));
  }

  #[test]
  fn test_report_contains_all_sections() {
    let (r, c) = sample();
    let text = render_report(&r, &c);
    assert!(text.contains("Your Analysis Results"));
    assert!(text.contains("Activation Hierarchy"));
    assert!(text.contains("Olympic Lifting Insights"));
    assert!(text.contains("Lower Body Recommendations"));
    assert!(text.contains("Upper Body Push Recommendations"));
    assert!(text.contains("Upper Body Pull Recommendations"));
  }

  #[test]
  fn test_video_link_rendered_with_long_leg_strategy() {
    let (_, c) = sample();
    assert_eq!(c.leg_strategy.as_str(), "long");
    let text = render_analysis_extras(&c);
    assert!(text.contains("Watch: https://www.youtube.com/watch?v=M2j1lp6a9lk"));
  }

  #[test]
  fn test_exercise_video_link_rendered_in_category() {
    use crate::analysis::Strategy;
    let text = render_category(crate::catalog::pull_recommendations(Strategy::Short));
    assert!(text.contains("Watch: https://www.youtube.com/watch?v=sRRQgK8Fm44"));
  }

  #[test]
  fn test_validation_failure_message() {
    let msg = validation_failure(&InputError::Missing("wingspan"));
    assert!(msg.contains("fill in all measurements with valid numbers"));
    assert!(msg.contains("wingspan"));
  }
}
