use clap::Parser;

use proportion_coach::catalog;
use proportion_coach::cli::{AssessArgs, Cli, Commands};
use proportion_coach::commands;
use proportion_coach::config::AppConfig;
use proportion_coach::models::MeasurementForm;
use proportion_coach::report;
use proportion_coach::storage::MeasurementStore;

fn form_from_args(args: &AssessArgs) -> MeasurementForm {
  MeasurementForm {
    height: args.height.clone(),
    total_leg: args.total_leg.clone(),
    lower_leg: args.lower_leg.clone(),
    wingspan: args.wingspan.clone(),
    lower_arm: args.lower_arm.clone(),
    upper_arm: args.upper_arm.clone(),
  }
}

/// Open the configured store for the commands that need one
async fn open_store() -> Result<MeasurementStore, String> {
  let config = AppConfig::from_env().map_err(|e| e.to_string())?;
  MeasurementStore::from_config(&config)
    .await
    .map_err(|e| format!("Failed to open storage: {}", e))
}

async fn run(cli: Cli) -> Result<String, String> {
  match cli.command {
    // Stateless commands need no store
    Commands::Fields => Ok(report::fields_help()),
    Commands::Catalog(args) => {
      let sections = [
        catalog::leg_recommendations(args.legs.into()),
        catalog::push_recommendations(args.arms.into()),
        catalog::pull_recommendations(args.arms.into()),
      ];
      Ok(sections.map(report::render_category).join("\n"))
    }

    Commands::Assess(args) => {
      let store = open_store().await?;
      let form = form_from_args(&args);
      commands::assess::assess_and_save(&store, &form, args.json).await
    }
    Commands::Show(args) => {
      let store = open_store().await?;
      commands::profile::show_saved(&store, args.json).await
    }
    Commands::Reset => {
      let store = open_store().await?;
      commands::profile::reset(&store).await
    }
  }
}


#[tokio::main]
async fn main() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let cli = Cli::parse();
  match run(cli).await {
    Ok(output) => println!("{}", output),
    Err(e) => {
      eprintln!("{}", e);
      std::process::exit(1);
    }
  }
}
