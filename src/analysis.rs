//! Deterministic analysis core for body-segment proportions
//!
//! This module turns six parsed measurements into derived ratios and
//! classifications. The content catalog interprets these pre-computed labels
//! rather than doing math itself.

use serde::{Deserialize, Serialize};

use crate::models::Measurements;

/// ---------------------------------------------------------------------------
/// Classification Thresholds
/// ---------------------------------------------------------------------------
///
/// Closed design decisions; the "average" band includes both endpoints.

const TIBIA_AVERAGE_MIN: f64 = 79.0;
const TIBIA_AVERAGE_MAX: f64 = 84.0;
const ULNA_AVERAGE_MIN: f64 = 79.0;
const ULNA_AVERAGE_MAX: f64 = 84.0;
const LEGS_AVERAGE_MIN: f64 = 44.0;
const LEGS_AVERAGE_MAX: f64 = 47.0;
const ARMS_AVERAGE_MIN: f64 = 1.0;
const ARMS_AVERAGE_MAX: f64 = 5.0;

/// ---------------------------------------------------------------------------
/// Labels
/// ---------------------------------------------------------------------------

/// Ordinal bucket for a single segment ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentClass {
  Short,
  Average,
  Long,
}

impl SegmentClass {
  /// Three-way split against a closed [lo, hi] "average" band.
  ///
  /// NaN compares false against everything, so a NaN ratio falls through to
  /// `Long`; +inf lands in `Long` and -inf in `Short` by ordinary comparison.
  /// That fallthrough is the documented contract for degenerate arithmetic
  /// (zero femur or humerus) and is pinned by tests below.
  fn from_value(value: f64, lo: f64, hi: f64) -> Self {
    match value {
      v if v < lo => SegmentClass::Short,
      v if v <= hi => SegmentClass::Average,
      _ => SegmentClass::Long,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      SegmentClass::Short => "short",
      SegmentClass::Average => "average",
      SegmentClass::Long => "long",
    }
  }
}

impl std::fmt::Display for SegmentClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for SegmentClass {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "short" => Ok(Self::Short),
      "average" => Ok(Self::Average),
      "long" => Ok(Self::Long),
      _ => Err(format!("Unknown segment class: {}", s)),
    }
  }
}

/// Binary training-strategy label derived from a limb's classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
  Short,
  Long,
}

impl Strategy {
  pub fn as_str(&self) -> &'static str {
    match self {
      Strategy::Short => "short",
      Strategy::Long => "long",
    }
  }
}

impl std::fmt::Display for Strategy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Strategy {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "short" => Ok(Self::Short),
      "long" => Ok(Self::Long),
      _ => Err(format!("Unknown strategy: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Derived Ratios
/// ---------------------------------------------------------------------------

/// The five values derived from one set of measurements.
///
/// Plain floating-point arithmetic, no rounding (display rounding is the
/// report layer's concern) and no validation: a zero femur or humerus yields
/// an infinite or NaN ratio, which flows unchanged into classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatedResults {
  /// Total leg minus lower leg; proxy for thigh-bone length
  pub femur_length: f64,

  /// Lower leg as a percentage of femur length
  pub tibia_femur_ratio: f64,

  /// Total leg as a percentage of standing height
  pub leg_height_ratio: f64,

  /// Wingspan minus height, in the input unit
  pub wingspan_minus_height: f64,

  /// Lower arm as a percentage of upper arm
  pub ulna_humerus_ratio: f64,
}

impl CalculatedResults {
  /// Compute all derived values from parsed measurements
  pub fn compute(m: &Measurements) -> Self {
    let femur_length = m.total_leg - m.lower_leg;
    let tibia_femur_ratio = (m.lower_leg / femur_length) * 100.0;
    let leg_height_ratio = (m.total_leg / m.height) * 100.0;
    let wingspan_minus_height = m.wingspan - m.height;
    let ulna_humerus_ratio = (m.lower_arm / m.upper_arm) * 100.0;

    Self {
      femur_length,
      tibia_femur_ratio,
      leg_height_ratio,
      wingspan_minus_height,
      ulna_humerus_ratio,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Classifications
/// ---------------------------------------------------------------------------

/// Four ordinal labels plus the two derived strategy labels.
///
/// This is the lookup key the content catalog is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifications {
  pub tibia: SegmentClass,
  pub ulna: SegmentClass,
  pub legs: SegmentClass,
  pub arms: SegmentClass,
  pub leg_strategy: Strategy,
  pub arm_strategy: Strategy,
}

impl Classifications {
  /// Classify one set of derived results
  pub fn classify(r: &CalculatedResults) -> Self {
    let tibia = SegmentClass::from_value(r.tibia_femur_ratio, TIBIA_AVERAGE_MIN, TIBIA_AVERAGE_MAX);
    let ulna = SegmentClass::from_value(r.ulna_humerus_ratio, ULNA_AVERAGE_MIN, ULNA_AVERAGE_MAX);
    let legs = SegmentClass::from_value(r.leg_height_ratio, LEGS_AVERAGE_MIN, LEGS_AVERAGE_MAX);
    let arms = SegmentClass::from_value(r.wingspan_minus_height, ARMS_AVERAGE_MIN, ARMS_AVERAGE_MAX);

    Self {
      tibia,
      ulna,
      legs,
      arms,
      leg_strategy: resolve_strategy(legs, tibia),
      arm_strategy: resolve_strategy(arms, ulna),
    }
  }
}

/// Resolve a limb's strategy from its whole-limb and intra-limb labels.
///
/// The whole-limb ratio dominates when decisive. When it is `Average`, the
/// segment ratio breaks the tie: a proportionally long distal segment gives
/// effective leverage equivalent to the opposite whole-limb build, so a
/// `Long` secondary flips the strategy to `Short`; any other secondary
/// defaults to `Long`.
fn resolve_strategy(primary: SegmentClass, secondary: SegmentClass) -> Strategy {
  match primary {
    SegmentClass::Short => Strategy::Short,
    SegmentClass::Long => Strategy::Long,
    SegmentClass::Average => {
      if secondary == SegmentClass::Long {
        Strategy::Short
      } else {
        Strategy::Long
      }
    }
  }
}

/// Run the full pipeline for one measurement set
pub fn assess(m: &Measurements) -> (CalculatedResults, Classifications) {
  let results = CalculatedResults::compute(m);
  let classifications = Classifications::classify(&results);
  (results, classifications)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  fn measurements(
    height: f64,
    total_leg: f64,
    lower_leg: f64,
    wingspan: f64,
    lower_arm: f64,
    upper_arm: f64,
  ) -> Measurements {
    Measurements {
      height,
      total_leg,
      lower_leg,
      wingspan,
      lower_arm,
      upper_arm,
    }
  }

  #[test]
  fn test_femur_is_exact_difference() {
    let m = measurements(180.0, 90.0, 45.0, 183.0, 27.0, 34.0);
    let r = CalculatedResults::compute(&m);
    assert_eq!(r.femur_length, 45.0);
    assert_eq!(r.tibia_femur_ratio, 100.0);
  }

  #[test]
  fn test_ratio_formulas() {
    let m = measurements(180.0, 90.0, 40.0, 185.0, 26.0, 32.5);
    let r = CalculatedResults::compute(&m);
    assert_eq!(r.femur_length, 50.0);
    assert_eq!(r.tibia_femur_ratio, 80.0);
    assert_eq!(r.leg_height_ratio, 50.0);
    assert_eq!(r.wingspan_minus_height, 5.0);
    assert_eq!(r.ulna_humerus_ratio, 80.0);
  }

  #[test]
  fn test_tibia_boundaries() {
    let classify = |v| SegmentClass::from_value(v, TIBIA_AVERAGE_MIN, TIBIA_AVERAGE_MAX);
    assert_eq!(classify(78.999), SegmentClass::Short);
    assert_eq!(classify(79.0), SegmentClass::Average);
    assert_eq!(classify(84.0), SegmentClass::Average);
    assert_eq!(classify(84.0001), SegmentClass::Long);
  }

  #[test]
  fn test_ulna_boundaries() {
    let classify = |v| SegmentClass::from_value(v, ULNA_AVERAGE_MIN, ULNA_AVERAGE_MAX);
    assert_eq!(classify(78.9), SegmentClass::Short);
    assert_eq!(classify(79.0), SegmentClass::Average);
    assert_eq!(classify(84.0), SegmentClass::Average);
    assert_eq!(classify(84.1), SegmentClass::Long);
  }

  #[test]
  fn test_legs_boundaries() {
    let classify = |v| SegmentClass::from_value(v, LEGS_AVERAGE_MIN, LEGS_AVERAGE_MAX);
    assert_eq!(classify(43.999), SegmentClass::Short);
    assert_eq!(classify(44.0), SegmentClass::Average);
    assert_eq!(classify(47.0), SegmentClass::Average);
    assert_eq!(classify(47.001), SegmentClass::Long);
  }

  #[test]
  fn test_arms_boundaries() {
    let classify = |v| SegmentClass::from_value(v, ARMS_AVERAGE_MIN, ARMS_AVERAGE_MAX);
    assert_eq!(classify(0.999), SegmentClass::Short);
    assert_eq!(classify(1.0), SegmentClass::Average);
    assert_eq!(classify(5.0), SegmentClass::Average);
    assert_eq!(classify(5.0001), SegmentClass::Long);
    assert_eq!(classify(-3.0), SegmentClass::Short);
  }

  #[test]
  fn test_decisive_primary_ignores_secondary() {
    for secondary in [SegmentClass::Short, SegmentClass::Average, SegmentClass::Long] {
      assert_eq!(resolve_strategy(SegmentClass::Short, secondary), Strategy::Short);
      assert_eq!(resolve_strategy(SegmentClass::Long, secondary), Strategy::Long);
    }
  }

  #[test]
  fn test_average_primary_tie_break() {
    assert_eq!(
      resolve_strategy(SegmentClass::Average, SegmentClass::Long),
      Strategy::Short
    );
    assert_eq!(
      resolve_strategy(SegmentClass::Average, SegmentClass::Average),
      Strategy::Long
    );
    assert_eq!(
      resolve_strategy(SegmentClass::Average, SegmentClass::Short),
      Strategy::Long
    );
  }

  #[test]
  fn test_end_to_end_scenario() {
    let m = measurements(180.0, 90.0, 47.0, 183.0, 27.0, 34.0);
    let (r, c) = assess(&m);

    assert_eq!(r.femur_length, 43.0);
    assert!((r.tibia_femur_ratio - 109.3).abs() < 0.05);
    assert_eq!(r.leg_height_ratio, 50.0);
    assert_eq!(r.wingspan_minus_height, 3.0);
    assert!((r.ulna_humerus_ratio - 79.4).abs() < 0.05);

    assert_eq!(c.tibia, SegmentClass::Long);
    assert_eq!(c.legs, SegmentClass::Long);
    assert_eq!(c.leg_strategy, Strategy::Long);

    // arms average, ulna average (not long) -> long arm strategy
    assert_eq!(c.arms, SegmentClass::Average);
    assert_eq!(c.ulna, SegmentClass::Average);
    assert_eq!(c.arm_strategy, Strategy::Long);
  }

  #[test]
  fn test_classify_infinite_ratio_is_long() {
    // totalLeg == lowerLeg makes the femur zero and the ratio +inf
    let m = measurements(180.0, 45.0, 45.0, 183.0, 27.0, 34.0);
    let (r, c) = assess(&m);
    assert!(r.tibia_femur_ratio.is_infinite());
    assert_eq!(c.tibia, SegmentClass::Long);
  }

  #[test]
  fn test_classify_nan_falls_through_to_long() {
    // 0 / 0: both leg segments zero
    let m = measurements(180.0, 0.0, 0.0, 183.0, 27.0, 34.0);
    let (r, c) = assess(&m);
    assert!(r.tibia_femur_ratio.is_nan());
    assert_eq!(c.tibia, SegmentClass::Long);
    assert_eq!(
      SegmentClass::from_value(f64::NEG_INFINITY, 79.0, 84.0),
      SegmentClass::Short
    );
  }

  #[test]
  fn test_negative_femur_classifies_short() {
    // lowerLeg > totalLeg is accepted and produces a negative ratio
    let m = measurements(180.0, 40.0, 45.0, 183.0, 27.0, 34.0);
    let (r, c) = assess(&m);
    assert_eq!(r.femur_length, -5.0);
    assert!(r.tibia_femur_ratio < 0.0);
    assert_eq!(c.tibia, SegmentClass::Short);
  }

  #[test]
  fn test_repeated_runs_are_bit_identical() {
    let m = measurements(171.3, 82.7, 41.9, 176.1, 26.4, 33.3);
    let (r1, c1) = assess(&m);
    let (r2, c2) = assess(&m);
    assert_eq!(r1, r2);
    assert_eq!(c1, c2);
  }

  #[test]
  fn test_label_round_trip() {
    use std::str::FromStr;
    for class in [SegmentClass::Short, SegmentClass::Average, SegmentClass::Long] {
      assert_eq!(SegmentClass::from_str(class.as_str()), Ok(class));
    }
    assert!(SegmentClass::from_str("tall").is_err());
    assert_eq!(Strategy::from_str("long"), Ok(Strategy::Long));
  }
}
