use crate::config::toml_config::{AirportConfig, WeatherMode};
use crate::domain::model::Operation;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "airport")]
#[command(about = "Land and launch planes at a simulated airport")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the airport name from config
    #[arg(long)]
    pub name: Option<String>,

    /// Override the airport capacity from config
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Force stormy weather, grounding every take-off
    #[arg(long)]
    pub stormy: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the report and logs as JSON
    #[arg(long)]
    pub json: bool,

    /// Operations to run in order
    #[arg(value_enum)]
    pub operations: Vec<Operation>,
}

impl CliConfig {
    /// Loads the config file, if any, applies command line overrides and
    /// validates the result.
    pub fn resolve(&self) -> Result<AirportConfig> {
        let mut config = match &self.config {
            Some(path) => AirportConfig::from_file(path)?,
            None => AirportConfig::default(),
        };

        if let Some(name) = &self.name {
            config.airport.name = name.clone();
        }
        if let Some(capacity) = self.capacity {
            config.airport.capacity = capacity;
        }
        if self.stormy {
            config.weather.mode = WeatherMode::Stormy;
        }

        config.validate()?;
        Ok(config)
    }
}
