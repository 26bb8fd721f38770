/*!
 * Tests for app configuration
 */

use cutalign::app_config::{AlignmentMode, Config, LogLevel};

/// Test default configuration values
#[test]
fn test_config_default_withNoInput_shouldUseExpectedValues() {
    let config = Config::default();

    assert_eq!(config.frame_rate, 60.0);
    assert_eq!(config.mode, AlignmentMode::Strict);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test validation accepts a sane configuration
#[test]
fn test_config_validate_withValidValues_shouldPass() {
    let config = Config {
        frame_rate: 23.976,
        mode: AlignmentMode::Minimal,
        log_level: LogLevel::Debug,
    };

    assert!(config.validate().is_ok());
}

/// Test validation rejects unusable frame rates
#[test]
fn test_config_validate_withBadFrameRate_shouldFail() {
    for frame_rate in [0.0, -25.0, f64::NAN, f64::INFINITY] {
        let config = Config {
            frame_rate,
            ..Config::default()
        };
        assert!(config.validate().is_err(), "accepted frame rate {}", frame_rate);
    }
}

/// Test JSON round-trip of the configuration
#[test]
fn test_config_serde_withRoundTrip_shouldPreserveValues() {
    let config = Config {
        frame_rate: 29.97,
        mode: AlignmentMode::Minimal,
        log_level: LogLevel::Warn,
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"minimal\""));

    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.frame_rate, 29.97);
    assert_eq!(parsed.mode, AlignmentMode::Minimal);
    assert_eq!(parsed.log_level, LogLevel::Warn);
}

/// Test missing fields fall back to defaults when deserializing
#[test]
fn test_config_serde_withEmptyObject_shouldUseDefaults() {
    let parsed: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(parsed.frame_rate, 60.0);
    assert_eq!(parsed.mode, AlignmentMode::Strict);
    assert_eq!(parsed.log_level, LogLevel::Info);
}

/// Test alignment mode string conversions
#[test]
fn test_alignment_mode_withStringConversions_shouldRoundTrip() {
    assert_eq!("strict".parse::<AlignmentMode>().unwrap(), AlignmentMode::Strict);
    assert_eq!("MINIMAL".parse::<AlignmentMode>().unwrap(), AlignmentMode::Minimal);
    assert!("nearest".parse::<AlignmentMode>().is_err());

    assert_eq!(AlignmentMode::Strict.to_string(), "strict");
    assert_eq!(AlignmentMode::Minimal.to_lowercase_string(), "minimal");
    assert_eq!(AlignmentMode::Minimal.display_name(), "Minimal");
}
