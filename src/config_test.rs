use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_bind_all_interfaces_on_preview_port() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:4173".parse().unwrap());
    assert!(cfg.public_dir.ends_with("public"));
    assert_eq!(
        cfg.allowed_hosts,
        HostPolicy::Only(vec!["acw.gixia.org".to_owned(), "localhost".to_owned()])
    );
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "5173"),
        ("PUBLIC_DIR", "/srv/acw"),
        ("ALLOWED_HOSTS", "*"),
    ])
    .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:5173".parse().unwrap());
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/acw"));
    assert_eq!(cfg.allowed_hosts, HostPolicy::Any);
}

#[test]
fn invalid_port_and_host_are_errors() {
    assert_eq!(config_from(&[("PORT", "http")]).unwrap_err(), ConfigError::InvalidPort("http".into()));
    assert_eq!(config_from(&[("PORT", "70000")]).unwrap_err(), ConfigError::InvalidPort("70000".into()));
    assert_eq!(config_from(&[("HOST", "example.com")]).unwrap_err(), ConfigError::InvalidAddr("example.com".into()));
}

#[test]
fn host_policy_parses_lists() {
    assert_eq!(HostPolicy::parse(""), HostPolicy::Any);
    assert_eq!(HostPolicy::parse(" , "), HostPolicy::Any);
    assert_eq!(HostPolicy::parse("a.org, *"), HostPolicy::Any);
    assert_eq!(HostPolicy::parse(" A.org ,b.org"), HostPolicy::Only(vec!["a.org".into(), "b.org".into()]));
}

#[test]
fn host_policy_matches_names_without_port() {
    let policy = HostPolicy::parse("acw.gixia.org");
    assert!(policy.allows(Some("acw.gixia.org")));
    assert!(policy.allows(Some("ACW.gixia.org:443")));
    assert!(!policy.allows(Some("evil.example")));
    assert!(!policy.allows(Some("acw.gixia.org.evil.example")));
    assert!(!policy.allows(None));
}

#[test]
fn host_policy_always_accepts_local_and_ip_hosts() {
    let policy = HostPolicy::parse("acw.gixia.org");
    assert!(policy.allows(Some("localhost:4173")));
    assert!(policy.allows(Some("app.localhost")));
    assert!(policy.allows(Some("127.0.0.1:4173")));
    assert!(policy.allows(Some("[::1]:4173")));
}

#[test]
fn host_policy_dot_entries_match_subdomains() {
    let policy = HostPolicy::parse(".gixia.org");
    assert!(policy.allows(Some("gixia.org")));
    assert!(policy.allows(Some("acw.gixia.org")));
    assert!(!policy.allows(Some("notgixia.org")));
}

#[test]
fn any_policy_accepts_missing_host() {
    assert!(HostPolicy::Any.allows(None));
}
