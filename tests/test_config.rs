use std::collections::HashMap;
use std::path::PathBuf;

use webroot_server::config::ServerConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.bind_address, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.web_root, PathBuf::from("webroot"));
    assert_eq!(cfg.index_file, "index.html");
    assert!(cfg.is_allowed_extension(".html"));
    assert!(cfg.is_allowed_extension(".css"));
    assert!(cfg.is_allowed_extension(".js"));
    assert!(!cfg.is_allowed_extension(".exe"));
}

#[test]
fn test_config_listen_addr() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = ServerConfig::from_yaml("port: 9000\nweb_root: public\n").unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.web_root, PathBuf::from("public"));
    // Unspecified fields keep their defaults
    assert_eq!(cfg.bind_address, "127.0.0.1");
    assert_eq!(cfg.index_file, "index.html");
}

#[test]
fn test_config_extensions_are_normalized() {
    let yaml = "allowed_extensions:\n  - HTML\n  - .Css\n  - txt\n";
    let cfg = ServerConfig::from_yaml(yaml).unwrap();

    assert!(cfg.is_allowed_extension(".html"));
    assert!(cfg.is_allowed_extension(".css"));
    assert!(cfg.is_allowed_extension(".txt"));
    assert!(!cfg.is_allowed_extension(".js"));
}

#[test]
fn test_config_rejects_empty_extension_list() {
    assert!(ServerConfig::from_yaml("allowed_extensions: []\n").is_err());
}

#[test]
fn test_config_rejects_empty_index_file() {
    assert!(ServerConfig::from_yaml("index_file: \"\"\n").is_err());
}

#[test]
fn test_config_rejects_unknown_fields() {
    assert!(ServerConfig::from_yaml("listen: 0.0.0.0\n").is_err());
}

#[test]
fn test_config_overrides() {
    let mut cfg = ServerConfig::default();
    cfg.apply_overrides(lookup(&[
        ("HOST", "0.0.0.0"),
        ("PORT", "3000"),
        ("WEB_ROOT", "/srv/www"),
    ]))
    .unwrap();

    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
    assert_eq!(cfg.web_root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_no_overrides_keeps_values() {
    let mut cfg = ServerConfig::default();
    cfg.apply_overrides(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn test_config_invalid_port_override() {
    let mut cfg = ServerConfig::default();
    assert!(cfg.apply_overrides(lookup(&[("PORT", "eighty")])).is_err());
    assert!(cfg.apply_overrides(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn test_config_missing_file() {
    let err = ServerConfig::from_file("/nonexistent/webroot-server.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_config_from_file_and_bootstrap() {
    let dir = std::env::temp_dir().join(format!("webroot-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let root = dir.join("site");
    let file = dir.join("server.yaml");
    std::fs::write(&file, format!("web_root: {}\nport: 8181\n", root.display())).unwrap();

    let cfg = ServerConfig::from_file(&file).unwrap();
    assert_eq!(cfg.port, 8181);
    assert!(!root.exists());

    cfg.ensure_web_root().unwrap();
    assert!(root.is_dir());

    // Second call is a no-op
    cfg.ensure_web_root().unwrap();

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_clone() {
    let cfg1 = ServerConfig::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1, cfg2);
}
