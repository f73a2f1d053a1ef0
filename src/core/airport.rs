use crate::config::toml_config::AirportConfig;
use crate::core::weather::{ClearSkies, FixedWeather};
use crate::domain::model::{AirportSnapshot, Plane};
use crate::domain::ports::WeatherService;
use crate::utils::error::{AirportError, Result};
use crate::utils::validation::Validate;

pub const DEFAULT_CAPACITY: usize = 1;
pub const DEFAULT_NAME: &str = "airport";

/// An airport that parks landed planes up to its capacity.
///
/// Every operation validates fully before touching any state, so a refused
/// landing or take-off leaves both the airport and the plane unchanged.
#[derive(Debug)]
pub struct Airport<W: WeatherService = ClearSkies> {
    name: String,
    planes: Vec<Plane>,
    capacity: usize,
    weather: W,
}

impl Airport {
    pub fn new() -> Self {
        Self::with_weather(ClearSkies)
    }
}

impl Default for Airport {
    fn default() -> Self {
        Self::new()
    }
}

impl Airport<FixedWeather> {
    /// Builds an airport from a validated configuration.
    pub fn from_config(config: &AirportConfig) -> Result<Self> {
        config.validate()?;

        let weather = FixedWeather {
            stormy: config.is_stormy(),
        };

        Self::with_weather(weather)
            .named(config.airport.name.clone())
            .with_capacity(config.airport.capacity)
    }
}

impl<W: WeatherService> Airport<W> {
    pub fn with_weather(weather: W) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            planes: Vec::new(),
            capacity: DEFAULT_CAPACITY,
            weather,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Result<Self> {
        self.set_capacity(capacity)?;
        Ok(self)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity for all subsequent landings. Planes already
    /// parked are never evicted, even if they now exceed the new capacity.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity == 0 {
            return Err(AirportError::InvalidCapacity(capacity));
        }

        if capacity < self.planes.len() {
            tracing::warn!(
                airport = %self.name,
                capacity,
                parked = self.planes.len(),
                "capacity lowered below current occupancy"
            );
        }

        self.capacity = capacity;
        Ok(())
    }

    /// Parked planes, oldest arrival first.
    #[inline]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.planes.len() >= self.capacity
    }

    pub fn weather_check(&self) -> bool {
        self.weather.is_stormy()
    }

    pub fn set_weather(&mut self, weather: W) {
        self.weather = weather;
    }

    pub fn land(&mut self, plane: &Plane) -> Result<()> {
        if !plane.flying() {
            return Err(self.refuse("land", Some(plane), AirportError::AlreadyLanded));
        }
        if self.is_full() {
            return Err(self.refuse("land", Some(plane), AirportError::CapacityFull));
        }

        plane.set_flying(false);
        self.planes.push(plane.clone());

        tracing::debug!(
            airport = %self.name,
            plane = %plane.id(),
            parked = self.planes.len(),
            capacity = self.capacity,
            "plane landed"
        );
        Ok(())
    }

    /// Launches `plane` and removes it from the apron.
    ///
    /// Only the plane passed in leaves, wherever it sits in the landing
    /// order. A landed plane that is parked somewhere else is refused with
    /// [`AirportError::NotParked`].
    pub fn take_off(&mut self, plane: &Plane) -> Result<Plane> {
        if self.planes.is_empty() {
            return Err(self.refuse("take-off", Some(plane), AirportError::NoPlanes));
        }
        if self.weather_check() {
            return Err(self.refuse("take-off", Some(plane), AirportError::StormyWeather));
        }
        if plane.flying() {
            return Err(self.refuse("take-off", Some(plane), AirportError::AlreadyFlying));
        }

        let position = match self.planes.iter().rposition(|parked| parked == plane) {
            Some(position) => position,
            None => {
                return Err(self.refuse("take-off", Some(plane), AirportError::NotParked));
            }
        };

        let departed = self.planes.remove(position);
        departed.set_flying(true);

        tracing::debug!(
            airport = %self.name,
            plane = %departed.id(),
            parked = self.planes.len(),
            "plane took off"
        );
        Ok(departed)
    }

    /// Launches whichever plane landed most recently.
    pub fn take_off_latest(&mut self) -> Result<Plane> {
        match self.planes.last().cloned() {
            Some(plane) => self.take_off(&plane),
            None => Err(self.refuse("take-off", None, AirportError::NoPlanes)),
        }
    }

    pub fn snapshot(&self) -> AirportSnapshot {
        AirportSnapshot {
            name: self.name.clone(),
            capacity: self.capacity,
            parked: self.planes.iter().map(Plane::id).collect(),
            stormy: self.weather_check(),
        }
    }

    fn refuse(
        &self,
        operation: &str,
        plane: Option<&Plane>,
        error: AirportError,
    ) -> AirportError {
        match plane {
            Some(plane) => tracing::warn!(
                airport = %self.name,
                plane = %plane.id(),
                error = %error,
                "{} refused",
                operation
            ),
            None => tracing::warn!(
                airport = %self.name,
                error = %error,
                "{} refused",
                operation
            ),
        }
        error
    }
}
