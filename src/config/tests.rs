use serial_test::serial;

use super::load_config;
use super::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.log.level, "info");
    assert_eq!(settings.demo.topic, "foo");
    assert_eq!(settings.demo.payload, "hello world");
}

#[test]
#[serial]
fn test_load_config_falls_back_to_defaults() {
    let settings = load_config().expect("load_config should succeed without sources");
    assert_eq!(settings.log.level, "info");
    assert_eq!(settings.demo.topic, "foo");
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    temp_env::with_vars(
        [
            ("LOG_LEVEL", Some("debug")),
            ("DEMO_TOPIC", Some("announcements")),
        ],
        || {
            let settings = load_config().expect("load_config should succeed");
            assert_eq!(settings.log.level, "debug");
            assert_eq!(settings.demo.topic, "announcements");
            // Untouched values still come from the defaults.
            assert_eq!(settings.demo.payload, "hello world");
        },
    );
}
