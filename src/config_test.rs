use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.refresh_delay, Duration::from_millis(500));
}

#[test]
fn reads_all_vars() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("REFRESH_DELAY_MS", "25"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.refresh_delay, Duration::from_millis(25));
}

#[test]
fn trims_whitespace() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn zero_refresh_delay_is_allowed() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("REFRESH_DELAY_MS", "0")])).unwrap();
    assert_eq!(cfg.refresh_delay, Duration::ZERO);
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "70000".into() });
    assert_eq!(err.to_string(), "invalid PORT: \"70000\"");
}

#[test]
fn invalid_host_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}

#[test]
fn negative_delay_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("REFRESH_DELAY_MS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "REFRESH_DELAY_MS", .. }));
}
