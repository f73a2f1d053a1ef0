use airport::{Airport, AirportConfig, AirportError, ControlTower, Operation};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_end_to_end_run_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[airport]
name = "LGW"
capacity = 2

[weather]
mode = "clear"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = AirportConfig::from_file(temp_file.path()).unwrap();
    let airport = Airport::from_config(&config).unwrap();
    let mut tower = ControlTower::new(airport);

    let report = tower.run(&[
        Operation::Land,
        Operation::Land,
        Operation::Land,
        Operation::TakeOff,
    ]);

    assert_eq!(report.airport.name, "LGW");
    assert_eq!(report.refused(), 1);
    assert_eq!(report.steps[2].error.as_deref(), Some("Airport Full"));
    // The latest arrival leaves first.
    assert_eq!(report.steps[3].plane, report.steps[1].plane);
    assert_eq!(report.airport.parked, vec![report.steps[0].plane.unwrap()]);
}

#[test]
fn test_stormy_config_grounds_every_take_off() {
    let config = AirportConfig::from_toml_str("[weather]\nmode = \"stormy\"\n").unwrap();
    let mut tower = ControlTower::new(Airport::from_config(&config).unwrap());

    let report = tower.run(&[Operation::Land, Operation::TakeOff, Operation::TakeOff]);

    assert_eq!(report.refused(), 2);
    assert_eq!(tower.airport().len(), 1);
}

#[test]
fn test_invalid_config_never_builds_an_airport() {
    let config = AirportConfig::from_toml_str("[airport]\ncapacity = 0\n").unwrap();

    match Airport::from_config(&config) {
        Err(AirportError::InvalidConfigValueError { field, .. }) => {
            assert_eq!(field, "airport.capacity");
        }
        other => panic!("unexpected result: {:?}", other.map(|a| a.snapshot())),
    }
}
