use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(!config.validate_remote);
    assert_eq!(config.gate, GateConfig::default());
}

#[test]
fn reads_port_and_remote_flag() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("GATE_VALIDATE_REMOTE", "yes"),
        ("API_BASE_URL", "https://api.example.org/"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert!(config.validate_remote);
    assert_eq!(config.gate.api_base_url.as_deref(), Some("https://api.example.org"));
}

#[test]
fn unrecognized_remote_flag_is_off() {
    let config = ServerConfig::from_lookup(lookup(&[("GATE_VALIDATE_REMOTE", "maybe")])).unwrap();
    assert!(!config.validate_remote);
}

#[test]
fn invalid_port_is_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::Port(ref raw) if raw == "http"));
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn gate_errors_propagate() {
    let err = ServerConfig::from_lookup(lookup(&[("GATE_SIGNIN_PATH", "signin")])).unwrap_err();
    assert!(matches!(err, ConfigError::Gate(GateError::Config(_))));
}

#[test]
fn from_env_reads_process_environment() {
    let key = "GATE_VALIDATE_REMOTE";
    unsafe { std::env::set_var(key, "on") };
    let config = ServerConfig::from_env();
    unsafe { std::env::remove_var(key) };
    assert!(config.unwrap().validate_remote);
}
