use log::{Level, LevelFilter};
use opsdesk::config::LoggingConfig;
use opsdesk::logger::Logger;

fn emit(log: &dyn log::Log, level: Level, message: &str) {
    log.log(
        &log::Record::builder()
            .args(format_args!("{}", message))
            .level(level)
            .target("opsdesk::test")
            .build(),
    );
    log.flush();
}

#[test]
fn test_buffer_keeps_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_buffer_is_bounded() {
    let logger = Logger::new().with_capacity(3);
    for i in 0..10 {
        logger.log(format!("line {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].ends_with("line 9"));
    assert!(logs[2].ends_with("line 7"));
}

#[test]
fn test_from_config() {
    let disabled = Logger::from_config(&LoggingConfig::default());
    assert!(!disabled.is_enabled());

    let enabled = Logger::from_config(&LoggingConfig { enabled: true });
    assert!(enabled.is_enabled());
}

#[test]
fn test_dispatch_feeds_buffer_and_filters_level() {
    let logger = Logger::new();
    let (level, log) = logger.dispatch(LevelFilter::Info, None).unwrap().into_log();
    assert_eq!(level, LevelFilter::Info);

    emit(log.as_ref(), Level::Info, "Loaded 7 roles");
    emit(log.as_ref(), Level::Debug, "hidden");

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("INFO"));
    assert!(logs[0].contains("opsdesk::test"));
    assert!(logs[0].ends_with("Loaded 7 roles"));
}

#[test]
fn test_dispatch_writes_log_file() {
    let path = std::env::temp_dir()
        .join(format!("opsdesk_logs_{}", std::process::id()))
        .join("opsdesk.log");
    let logger = Logger::new();
    let (_, log) = logger.dispatch(LevelFilter::Debug, Some(&path)).unwrap().into_log();

    emit(log.as_ref(), Level::Warn, "Export of roles failed");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("WARN"));
    assert!(content.contains("Export of roles failed"));
    assert_eq!(logger.get_logs().len(), 1);

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn test_log_file_path() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("opsdesk/opsdesk.log"));
}
