pub mod airport;
pub mod tower;
pub mod weather;

pub use crate::domain::model::{AirportSnapshot, Operation, Plane, PlaneId};
pub use crate::domain::ports::WeatherService;
pub use crate::utils::error::Result;
