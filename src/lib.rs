pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{AirportConfig, WeatherMode};
pub use crate::core::{
    airport::{Airport, DEFAULT_CAPACITY},
    tower::{ControlTower, StepOutcome, TowerReport},
    weather::{ClearSkies, FixedWeather, WeatherFn},
};
pub use domain::model::{AirportSnapshot, Operation, Plane, PlaneId};
pub use domain::ports::WeatherService;
pub use utils::error::{AirportError, Result};
