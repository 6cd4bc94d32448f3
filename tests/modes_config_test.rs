use solid_drive::{DriveSession, ModeRegistry, ModeSettings, ModesConfig, SolidError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_modes_from_file() {
    let file = write_config(
        r#"
[fallback]
power = 180
suspension_height = 32

[[modes]]
name = "economy"
power = 150
suspension_height = 35

[[modes]]
name = "Sport"
power = 550
suspension_height = 8
"#,
    );

    let config = ModesConfig::from_file(file.path()).unwrap();
    let registry = ModeRegistry::from_config(&config).unwrap();
    assert_eq!(registry.mode_names(), vec!["comfort", "economy", "Sport"]);

    let mut session = DriveSession::from_config(&config).unwrap();
    session.select_mode("sport");
    assert_eq!(session.vehicle().settings(), ModeSettings::new(550, 8));

    session.select_mode("comfort");
    assert_eq!(session.vehicle().settings(), ModeSettings::COMFORT);

    assert_eq!(session.select_mode("unknown"), "standard");
    assert_eq!(session.vehicle().settings(), ModeSettings::new(180, 32));
}

#[test]
fn test_session_load_from_path() {
    let file = write_config("[[modes]]\nname = \"track\"\npower = 650\nsuspension_height = 5\n");
    let mut session = DriveSession::load(Some(file.path())).unwrap();
    session.select_mode("track");
    assert_eq!(session.vehicle().settings(), ModeSettings::new(650, 5));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModesConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SolidError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_invalid_config_rejected_by_registry() {
    let file = write_config(
        "[[modes]]\nname = \"eco\"\npower = 100\nsuspension_height = -1\n",
    );
    let config = ModesConfig::from_file(file.path()).unwrap();
    let err = ModeRegistry::from_config(&config).err().unwrap();
    assert!(err.to_string().contains("modes[0].suspension_height"));
}
