use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chat assistant for Delhi electricity load forecasts.
#[derive(Parser, Debug)]
#[command(name = "gridcast", version, about = "Electricity load forecasts from plain-language questions")]
pub struct CliArgs {
    /// Model weights (JSON)
    #[arg(long, env = "GRIDCAST_MODEL_PATH", default_value = "models/delhi_load_linear.json")]
    pub model: PathBuf,

    /// Year forecasts are moved into
    #[arg(long, env = "GRIDCAST_TARGET_YEAR")]
    pub target_year: Option<i32>,

    /// Treat this date as today instead of the system clock
    #[arg(long)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in (or sign up) and chat with the assistant
    Chat {
        /// Skip the sign-in prompt and use this name
        #[arg(long)]
        user: Option<String>,

        /// Write every forecast table the assistant returns to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Forecast a range of days directly
    Forecast {
        /// First day (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of days
        #[arg(long, default_value = "1")]
        days: u32,

        /// Hour of day (0-23)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: Option<u32>,

        /// Write the table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Today's load and the next seven days
    Dashboard {
        /// Write the week table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}
