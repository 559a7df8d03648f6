mod cli;
mod repl;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use load_chat::{Dispatcher, IntentResolver};
use load_forecast::{Dashboard, ForecastConfig, ForecastEngine, ForecastTable, LinearLoadModel};
use std::path::Path;

use cli::{CliArgs, Command};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let mut config = ForecastConfig::from_env().with_model_path(&args.model);
    if let Some(year) = args.target_year {
        config = config.with_target_year(year);
    }
    config.validate()?;
    config.log_summary();

    let model = LinearLoadModel::from_json_file(&args.model)
        .with_context(|| format!("failed to load model from {}", args.model.display()))?;
    let engine = ForecastEngine::with_config(model, config);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    match args.command {
        Command::Chat { user, export } => {
            let resolver = IntentResolver::default().with_default_hour(engine.config().default_hour);
            let dispatcher = Dispatcher::new(resolver, engine);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            repl::run(
                &dispatcher,
                stdin.lock(),
                stdout.lock(),
                repl::ChatOptions {
                    user,
                    today,
                    export,
                },
            )?;
        }
        Command::Forecast {
            date,
            days,
            hour,
            csv,
        } => {
            let hour = hour.unwrap_or(engine.config().default_hour);
            let table = engine.forecast(date.unwrap_or(today), days, hour)?;
            print_table(&table);
            if let Some(path) = csv {
                export_csv(&table, &path)?;
            }
        }
        Command::Dashboard { csv } => {
            let dashboard = Dashboard::build(&engine, today, engine.config().default_hour)?;
            print_dashboard(&dashboard, today);
            if let Some(path) = csv {
                export_csv(&dashboard.outlook, &path)?;
            }
        }
    }

    Ok(())
}

fn print_table(table: &ForecastTable) {
    println!("{:<12}{:>20}", "Date", "Predicted Load (MW)");
    for row in table.rows() {
        println!(
            "{:<12}{:>20.2}",
            row.date.format("%Y-%m-%d").to_string(),
            row.predicted_load_mw
        );
    }
}

fn print_dashboard(dashboard: &Dashboard, today: NaiveDate) {
    println!("Electricity Load Forecasting Dashboard");
    println!("Today: {}", today.format("%Y-%m-%d"));
    println!(
        "Forecasted Load for Today: {:.2} MW",
        dashboard.today.predicted_load_mw
    );
    println!();
    println!("Upcoming Load Forecast (Next 7 Days)");
    print_table(&dashboard.outlook);
    println!();
    print!("{}", dashboard.summary);
}

fn export_csv(table: &ForecastTable, path: &Path) -> Result<()> {
    table
        .to_csv_file(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Saved {} rows to {}", table.len(), path.display());
    Ok(())
}
