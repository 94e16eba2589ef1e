use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{init_dataset, serve};

#[derive(Parser)]
#[command(name = "salescast")]
#[command(about = "Sales history tracker with a three-month-average forecast web UI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the sales dataset CSV file
        ///
        /// Created with a header row if it does not exist yet. Columns:
        /// Year, Month, Product, Base Sales, Volume.
        #[arg(short, long, env = "DATASET_PATH", default_value = "sales_dataset.csv")]
        dataset_path: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,

        /// Year predictions are served for
        ///
        /// December submissions are stored under the year before this one.
        #[arg(short, long, env = "FORECAST_YEAR", default_value_t = 2024)]
        forecast_year: i32,
    },
    /// Create an empty dataset file with the expected header row
    InitDataset {
        /// Path to the sales dataset CSV file
        #[arg(short, long, env = "DATASET_PATH")]
        dataset_path: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                dataset_path,
                bind_address,
                forecast_year,
            } => {
                serve(&dataset_path, &bind_address, forecast_year).await?;
            }
            Commands::InitDataset { dataset_path } => {
                init_dataset(&dataset_path)?;
            }
        }
        Ok(())
    }
}
