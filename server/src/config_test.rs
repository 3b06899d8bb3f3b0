use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.data_source, DataSourceKind::Remote);
    assert_eq!(cfg.data_host, DEFAULT_DATA_HOST);
    assert_eq!(cfg.data_port, DEFAULT_PORT);
    assert_eq!(cfg.data_timeout_secs, DEFAULT_DATA_TIMEOUT_SECS);
    assert!(cfg.fixture_path.ends_with("data/testData.json"));
    assert!(cfg.assets.public_dir.ends_with("public"));
    assert_eq!(cfg.assets.output_name, DEFAULT_OUTPUT_NAME);
    assert_eq!(cfg.assets.site_title, DEFAULT_SITE_TITLE);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    assert_eq!(cfg.data_url(), "http://127.0.0.1:8080/data");
}

#[test]
fn data_port_follows_port_unless_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap();
    assert_eq!(cfg.data_port, 9000);

    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "9000"), ("DATA_PORT", "9100")])).unwrap();
    assert_eq!(cfg.data_port, 9100);
    assert_eq!(cfg.data_url(), "http://127.0.0.1:9100/data");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 3000 "),
        ("DATA_SOURCE", "fixture"),
        ("DATA_HOST", "data.internal"),
        ("DATA_TIMEOUT_SECS", "3"),
        ("FIXTURE_PATH", "/srv/fixture.json"),
        ("PUBLIC_DIR", "/srv/public"),
        ("PKG_DIR", "/srv/pkg"),
        ("OUTPUT_NAME", "articles"),
        ("SITE_TITLE", "News"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    assert_eq!(cfg.data_source, DataSourceKind::Fixture);
    assert_eq!(cfg.data_url(), "http://data.internal:3000/data");
    assert_eq!(cfg.data_timeout_secs, 3);
    assert_eq!(cfg.fixture_path, PathBuf::from("/srv/fixture.json"));
    assert_eq!(cfg.assets.public_dir, PathBuf::from("/srv/public"));
    assert_eq!(cfg.assets.pkg_dir, PathBuf::from("/srv/pkg"));
    assert_eq!(cfg.assets.output_name, "articles");
    assert_eq!(cfg.assets.site_title, "News");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATA_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "DATA_TIMEOUT_SECS", .. }));
}

#[test]
fn unknown_data_source_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATA_SOURCE", "postgres")])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownDataSource("postgres".to_owned()));
}

#[test]
fn ipv6_hosts_are_bracketed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "::"), ("DATA_HOST", "::1"), ("PORT", "8081")])).unwrap();
    assert_eq!(cfg.bind_addr(), "[::]:8081");
    assert_eq!(cfg.data_url(), "http://[::1]:8081/data");

    let cfg = ServerConfig::from_lookup(lookup_from(&[("DATA_HOST", "[::1]")])).unwrap();
    assert_eq!(cfg.data_url(), "http://[::1]:8080/data");
}
