use base::{FileLogger, StderrLogger, init_file_logger, init_stderr_logger, logs_to_file, report_fatal};
use log::Log;
use std::fs;

fn record_at(level: log::Level, line: u32, message: std::fmt::Arguments<'_>, f: impl FnOnce(&log::Record)) {
    let record = log::RecordBuilder::new()
        .level(level)
        .target("test")
        .file(Some("test.rs"))
        .line(Some(line))
        .args(message)
        .build();
    f(&record);
}

#[test]
fn test_stderr_logger_accepts_records() {
    let logger = StderrLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Debug)
        .target("test")
        .build();
    assert!(logger.enabled(&metadata));
    record_at(log::Level::Info, 42, format_args!("test message"), |record| {
        logger.log(record)
    });
    logger.flush();
}

#[test]
fn test_file_logger_creates_directory() {
    let dir = std::env::temp_dir().join(format!("bench-log-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let _logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    assert!(dir.is_dir());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_logger_writes_level_location_and_message() {
    let dir = std::env::temp_dir().join(format!("bench-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    record_at(log::Level::Warn, 100, format_args!("video.avi could not be opened"), |record| {
        logger.log(record)
    });
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&dir)
        .expect("Failed to read log directory")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1, "Should have exactly one log file");

    let content = fs::read_to_string(entries[0].path()).expect("Failed to read log file");
    assert!(content.contains("[WARN]"));
    assert!(content.contains("thread:"));
    assert!(content.contains("test.rs:100"));
    assert!(content.contains("video.avi could not be opened"));
    assert!(content.ends_with('\n'));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_init_file_logger_invalid_dir_returns_error() {
    let result = init_file_logger("/proc/nonexistent/path");
    assert!(result.is_err());
}

#[test]
fn test_init_stderr_logger_is_idempotent() {
    init_stderr_logger();
    init_stderr_logger();
    log::info!("logger installed");
}

#[test]
fn test_fatal_report_on_stderr_logger() {
    init_stderr_logger();
    assert!(!logs_to_file());
    report_fatal("model.xml could not be read");
}
