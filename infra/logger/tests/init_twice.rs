use tpost_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_returns_subscriber_error() {
    let _logger = Logger::builder()
        .name("tpost-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("tpost-init-twice-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");
}

#[test]
fn invalid_directive_is_rejected_before_install() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }

    let err = Logger::builder()
        .name("tpost-bad-directive")
        .env_filter("tpost_user=loud")
        .init()
        .expect_err("directive should not parse");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
