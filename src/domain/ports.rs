/// Answers whether conditions currently forbid take-off.
///
/// The airport queries this synchronously before every take-off. Stock
/// implementations live in [`crate::core::weather`]; closures qualify through
/// `WeatherFn`, and `Box<dyn WeatherService>` lets the capability be swapped
/// for one of a different type at runtime.
pub trait WeatherService {
    fn is_stormy(&self) -> bool;
}
