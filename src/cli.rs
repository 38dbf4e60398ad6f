use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::analysis::Strategy;

#[derive(Debug, Parser)]
#[command(
  name = "proportion-coach",
  version,
  about = "Exercise selection from body-segment proportions"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Assess a set of measurements and save them
  Assess(AssessArgs),
  /// Re-run the report from the last saved measurements
  Show(ShowArgs),
  /// Clear the saved measurements
  Reset,
  /// Print the recommendation catalog for a strategy pair
  Catalog(CatalogArgs),
  /// List the measurements and how to take them
  Fields,
}

/// Raw measurement input. Values stay text until validation so the command
/// layer, not clap, owns the numeric contract.
#[derive(Debug, Args)]
pub struct AssessArgs {
  #[arg(long, help = "Standing height (cm)")]
  pub height: String,

  #[arg(long, help = "Ankle to ASIS (cm)")]
  pub total_leg: String,

  #[arg(long, help = "Ankle to knee (cm)")]
  pub lower_leg: String,

  #[arg(long, help = "Fingertip to fingertip (cm)")]
  pub wingspan: String,

  #[arg(long, help = "Wrist to elbow (cm)")]
  pub lower_arm: String,

  #[arg(long, help = "Collar bone to elbow (cm)")]
  pub upper_arm: String,

  #[arg(long, default_value_t = false, help = "Emit the assessment as JSON")]
  pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
  #[arg(long, default_value_t = false, help = "Emit the assessment as JSON")]
  pub json: bool,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
  #[arg(long, value_enum, help = "Lower-body strategy")]
  pub legs: StrategyArg,

  #[arg(long, value_enum, help = "Upper-body strategy")]
  pub arms: StrategyArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
  Short,
  Long,
}

impl From<StrategyArg> for Strategy {
  fn from(arg: StrategyArg) -> Self {
    match arg {
      StrategyArg::Short => Strategy::Short,
      StrategyArg::Long => Strategy::Long,
    }
  }
}
