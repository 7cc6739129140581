use serde_json::json;
use tpost_domain::config::{AppConfig, CodecConfig, DuplicatePolicy, LogConfig};

#[test]
fn config_defaults_are_sane() {
    let codec = CodecConfig::default();
    assert!(!codec.compression);
    assert_eq!(codec.duplicate_accounts, DuplicatePolicy::Reject);

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(!log.json);
    assert!(log.directory.is_none());
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "codec": { "compression": true, "duplicate_accounts": "last_write_wins" },
        "log": { "level": "debug", "directory": "/tmp/logs" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(cfg.codec.compression);
    assert_eq!(cfg.codec.duplicate_accounts, DuplicatePolicy::LastWriteWins);
    assert_eq!(cfg.log.level, "debug");
    assert!(!cfg.log.json);
    assert_eq!(cfg.log.directory, Some(std::path::PathBuf::from("/tmp/logs")));
}

#[test]
fn empty_config_falls_back_to_defaults() {
    let cfg: AppConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.codec, CodecConfig::default());
    assert_eq!(cfg.log.level, "info");
}

#[test]
fn config_clones_share_until_mutated() {
    let mut cfg = AppConfig::default();
    let snapshot = cfg.clone();

    cfg.codec.compression = true;

    assert!(cfg.codec.compression);
    assert!(!snapshot.codec.compression);
}
