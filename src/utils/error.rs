use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirportError {
    #[error("Airport Full")]
    CapacityFull,

    #[error("This plane has already landed")]
    AlreadyLanded,

    #[error("There are no planes to take off")]
    NoPlanes,

    #[error("It's too stormy to take off")]
    StormyWeather,

    #[error("This plane is already flying")]
    AlreadyFlying,

    #[error("This plane is not parked at this airport")]
    NotParked,

    #[error("Capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AirportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_messages() {
        assert_eq!(AirportError::CapacityFull.to_string(), "Airport Full");
        assert_eq!(
            AirportError::AlreadyLanded.to_string(),
            "This plane has already landed"
        );
        assert_eq!(
            AirportError::NoPlanes.to_string(),
            "There are no planes to take off"
        );
        assert_eq!(
            AirportError::StormyWeather.to_string(),
            "It's too stormy to take off"
        );
        assert_eq!(
            AirportError::AlreadyFlying.to_string(),
            "This plane is already flying"
        );
    }

    #[test]
    fn test_config_value_message_names_the_field() {
        let error = AirportError::InvalidConfigValueError {
            field: "airport.capacity".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Invalid value '0' for 'airport.capacity': Value must be at least 1"
        );
    }
}
