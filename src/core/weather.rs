use crate::domain::ports::WeatherService;
use std::fmt;

/// Never stormy. The default for a new airport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearSkies;

impl WeatherService for ClearSkies {
    fn is_stormy(&self) -> bool {
        false
    }
}

/// Weather pinned to a single answer, as chosen by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedWeather {
    pub stormy: bool,
}

impl FixedWeather {
    pub fn clear() -> Self {
        Self { stormy: false }
    }

    pub fn stormy() -> Self {
        Self { stormy: true }
    }
}

impl WeatherService for FixedWeather {
    fn is_stormy(&self) -> bool {
        self.stormy
    }
}

/// Adapts a `Fn() -> bool` closure into a weather capability.
#[derive(Clone, Copy)]
pub struct WeatherFn<F>(pub F);

impl<F> WeatherService for WeatherFn<F>
where
    F: Fn() -> bool,
{
    fn is_stormy(&self) -> bool {
        (self.0)()
    }
}

impl<F> fmt::Debug for WeatherFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherFn").finish_non_exhaustive()
    }
}

impl<T> WeatherService for Box<T>
where
    T: WeatherService + ?Sized,
{
    fn is_stormy(&self) -> bool {
        (**self).is_stormy()
    }
}
