use super::*;

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn parses_port_and_bind_addr() {
    let config = ServerConfig::from_vars(Some(" 8080 "), Some("127.0.0.1")).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parses_ipv6_bind_addr() {
    let config = ServerConfig::from_vars(None, Some("::1")).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_vars(Some("70000"), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"70000\"");
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_vars(None, Some("localhost")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
}
