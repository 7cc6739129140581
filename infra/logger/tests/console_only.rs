use tpost_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_output() {
    let logger = Logger::builder()
        .name("tpost-console-only")
        .level(LevelFilter::WARN)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output());
    tracing::warn!("console output goes to stderr");
}
