// Test config file loading and saving across formats
use serde::{Deserialize, Serialize};
use swerve_core::config::{self, ConfigFormat};
use swerve_core::SwerveError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Constraints {
    max_velocity: f64,
    max_acceleration: f64,
    reversed: bool,
}

fn sample() -> Constraints {
    Constraints {
        max_velocity: 4.2,
        max_acceleration: 3.0,
        reversed: false,
    }
}

#[test]
fn test_save_and_load_each_format() {
    let dir = tempfile::tempdir().unwrap();

    for format in [ConfigFormat::Yaml, ConfigFormat::Toml, ConfigFormat::Json] {
        let path = dir.path().join(format!("constraints.{}", format.extension()));
        config::save_file(&sample(), &path).unwrap();

        let loaded: Constraints = config::load_file(&path).unwrap();
        assert_eq!(loaded, sample(), "round trip through {}", format);
    }
}

#[test]
fn test_unknown_extension_falls_back() {
    let dir = tempfile::tempdir().unwrap();

    // YAML content under an unknown extension
    let yaml_path = dir.path().join("constraints.cfg");
    std::fs::write(
        &yaml_path,
        "max_velocity: 4.2\nmax_acceleration: 3.0\nreversed: false\n",
    )
    .unwrap();
    let loaded: Constraints = config::load_file(&yaml_path).unwrap();
    assert_eq!(loaded, sample());

    // TOML content under an unknown extension
    let toml_path = dir.path().join("constraints.conf");
    std::fs::write(
        &toml_path,
        "max_velocity = 4.2\nmax_acceleration = 3.0\nreversed = false\n",
    )
    .unwrap();
    let loaded: Constraints = config::load_file(&toml_path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result: Result<Constraints, _> = config::load_file(dir.path().join("missing.yaml"));
    match result {
        Err(SwerveError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected IO error, got {:?}", other),
    }
}

#[test]
fn test_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("constraints.yaml");
    let err = config::save_file(&sample(), &path).unwrap_err();
    assert!(err.is_io(), "{}", err);
}

#[test]
fn test_unknown_extension_garbage_names_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("constraints.cfg");
    std::fs::write(&path, "max_velocity: [
max_acceleration = 
").unwrap();

    let err = config::load_file::<Constraints, _>(&path).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, SwerveError::Config(_)));
    assert!(msg.contains("YAML"), "{}", msg);
    assert!(msg.contains("TOML"), "{}", msg);
}

#[test]
fn test_unknown_extension_saves_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("constraints.out");
    config::save_file(&sample(), &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Constraints = config::parse_str(&contents, ConfigFormat::Yaml).unwrap();
    assert_eq!(parsed, sample());
}
