use std::fs;

use tempfile::TempDir;
use wind_turbine::{SettingsError, SpeedLevel, SpeedSettings};

fn settings_with(contents: impl AsRef<[u8]>) -> (TempDir, SpeedSettings) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.txt");
    fs::write(&path, contents).unwrap();
    (dir, SpeedSettings::new(path))
}

// ============================================================================
// Valid values
// ============================================================================

#[test]
fn test_every_valid_level_is_applied_exactly() {
    for v in 1..=10u8 {
        let (_dir, settings) = settings_with(&format!("{}\n", v));
        let mut speed = SpeedLevel::default();

        assert!(settings.poll(&mut speed));
        assert_eq!(speed.get(), v);
    }
}

#[test]
fn test_rewrite_between_polls_is_picked_up() {
    let (_dir, settings) = settings_with("2");
    let mut speed = SpeedLevel::default();

    settings.poll(&mut speed);
    assert_eq!(speed.get(), 2);

    fs::write(settings.path(), "9").unwrap();
    settings.poll(&mut speed);
    assert_eq!(speed.get(), 9);
}

// ============================================================================
// Invalid values leave the previous speed alone
// ============================================================================

#[test]
fn test_out_of_range_keeps_previous_value() {
    for bad in ["0", "11", "-5", "15"] {
        let (_dir, settings) = settings_with(bad);
        let mut speed = SpeedLevel::new(4).unwrap();

        assert!(!settings.poll(&mut speed), "{} should be rejected", bad);
        assert_eq!(speed.get(), 4);
    }
}

#[test]
fn test_overflowing_integer_keeps_previous_value() {
    let (_dir, settings) = settings_with("99999999999999999999");
    let mut speed = SpeedLevel::new(4).unwrap();

    assert!(!settings.poll(&mut speed));
    assert_eq!(speed.get(), 4);
}

#[test]
fn test_garbage_keeps_previous_value() {
    let (_dir, settings) = settings_with("very fast");
    let mut speed = SpeedLevel::new(8).unwrap();

    assert!(matches!(settings.read(), Err(SettingsError::Unparsable { .. })));
    assert!(!settings.poll(&mut speed));
    assert_eq!(speed.get(), 8);
}

#[test]
fn test_leading_integer_of_token_is_applied() {
    for (contents, expected) in [("5abc", 5), ("7.5", 7), ("3\n", 3), ("+2 fast", 2)] {
        let (_dir, settings) = settings_with(contents);
        let mut speed = SpeedLevel::default();

        assert!(settings.poll(&mut speed), "{:?} should be applied", contents);
        assert_eq!(speed.get(), expected);
    }
}

#[test]
fn test_non_utf8_after_first_token_is_ignored() {
    let (_dir, settings) = settings_with(b"7\n\xff\xfe");
    let mut speed = SpeedLevel::default();

    assert_eq!(settings.read().unwrap().get(), 7);
    assert!(settings.poll(&mut speed));
    assert_eq!(speed.get(), 7);
}

#[test]
fn test_non_utf8_token_is_unparsable() {
    let (_dir, settings) = settings_with(b"\xff7\n");
    let mut speed = SpeedLevel::new(5).unwrap();

    assert!(matches!(settings.read(), Err(SettingsError::Unparsable { .. })));
    assert!(!settings.poll(&mut speed));
    assert_eq!(speed.get(), 5);
}

#[test]
fn test_only_first_token_is_read_from_large_file() {
    let mut contents = b"4 ".to_vec();
    contents.extend(std::iter::repeat(b'x').take(1 << 20));
    let (_dir, settings) = settings_with(contents);

    assert_eq!(settings.read().unwrap().get(), 4);
}

#[test]
fn test_empty_file_keeps_previous_value() {
    let (_dir, settings) = settings_with("");
    let mut speed = SpeedLevel::new(3).unwrap();

    assert!(matches!(settings.read(), Err(SettingsError::Empty { .. })));
    assert!(!settings.poll(&mut speed));
    assert_eq!(speed.get(), 3);
}

#[test]
fn test_out_of_range_error_carries_value() {
    let (_dir, settings) = settings_with("15");
    match settings.read() {
        Err(SettingsError::OutOfRange { value, .. }) => assert_eq!(value, 15),
        other => panic!("expected OutOfRange, got {:?}", other),
    }
}

// ============================================================================
// Missing file
// ============================================================================

#[test]
fn test_absent_file_keeps_default() {
    let dir = TempDir::new().unwrap();
    let settings = SpeedSettings::new(dir.path().join("settings.txt"));
    let mut speed = SpeedLevel::default();

    assert!(!settings.poll(&mut speed));
    assert_eq!(speed.get(), 1);
}

#[test]
fn test_deleted_file_keeps_last_valid_value() {
    let (_dir, settings) = settings_with("6");
    let mut speed = SpeedLevel::default();
    settings.poll(&mut speed);

    fs::remove_file(settings.path()).unwrap();

    assert!(matches!(settings.read(), Err(SettingsError::Unavailable { .. })));
    assert!(!settings.poll(&mut speed));
    assert_eq!(speed.get(), 6);
}

#[test]
fn test_directory_instead_of_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let settings = SpeedSettings::new(dir.path());

    assert!(matches!(settings.read(), Err(SettingsError::Unavailable { .. })));
}
