use crate::core::airport::{DEFAULT_CAPACITY, DEFAULT_NAME};
use crate::utils::error::{AirportError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_positive_number, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportConfig {
    pub airport: AirportSection,
    pub weather: WeatherConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportSection {
    pub name: String,
    pub capacity: usize,
}

impl Default for AirportSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub mode: WeatherMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherMode {
    #[default]
    Clear,
    Stormy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl AirportConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AirportError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AirportError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn is_stormy(&self) -> bool {
        self.weather.mode == WeatherMode::Stormy
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for AirportConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("airport.name", &self.airport.name)?;
        validate_positive_number("airport.capacity", self.airport.capacity, 1)?;

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", &level.to_ascii_lowercase(), &LOG_LEVELS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[airport]
name = "LHR"
capacity = 3

[weather]
mode = "stormy"

[logging]
level = "debug"
"#;

        let config = AirportConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.airport.name, "LHR");
        assert_eq!(config.airport.capacity, 3);
        assert!(config.is_stormy());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AirportConfig::from_toml_str("").unwrap();

        assert_eq!(config, AirportConfig::default());
        assert_eq!(config.airport.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.airport.name, DEFAULT_NAME);
        assert!(!config.is_stormy());
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AirportConfig::from_toml_str("[airport]\ncapacity = 5\n").unwrap();

        assert_eq!(config.airport.capacity, 5);
        assert_eq!(config.airport.name, DEFAULT_NAME);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AIRPORT_TEST_NAME", "SFO");

        let toml_content = r#"
[airport]
name = "${AIRPORT_TEST_NAME}"
"#;

        let config = AirportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.airport.name, "SFO");

        std::env::remove_var("AIRPORT_TEST_NAME");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[airport]
name = "${AIRPORT_TEST_SURELY_UNSET}"
"#;

        let config = AirportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.airport.name, "${AIRPORT_TEST_SURELY_UNSET}");
    }

    #[test]
    fn test_unknown_weather_mode_is_a_parse_error() {
        let result = AirportConfig::from_toml_str("[weather]\nmode = \"foggy\"\n");
        assert!(matches!(result, Err(AirportError::ConfigParseError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let zero = AirportConfig::from_toml_str("[airport]\ncapacity = 0\n").unwrap();
        assert!(zero.validate().is_err());

        let blank = AirportConfig::from_toml_str("[airport]\nname = \"  \"\n").unwrap();
        assert!(blank.validate().is_err());

        let loud = AirportConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(loud.validate().is_err());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = AirportConfig::from_toml_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), Some("DEBUG"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[airport]
name = "file-test"
capacity = 2
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = AirportConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.airport.name, "file-test");
        assert_eq!(config.airport.capacity, 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = AirportConfig::from_file("/definitely/not/here/airport.toml");
        assert!(matches!(result, Err(AirportError::IoError(_))));
    }
}
