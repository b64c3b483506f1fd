// Installs the global file logger, so it runs in its own test binary.
use base::{format_today, init_file_logger, logs_to_file, report_fatal};
use std::fs;

#[test]
fn test_fatal_report_goes_to_log_file() {
    let dir = std::env::temp_dir().join(format!("bench-log-test-{}-fatal", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    init_file_logger(&dir).expect("Failed to install file logger");
    assert!(logs_to_file());

    report_fatal("compile failed for device NPU");

    let content = fs::read_to_string(dir.join(format!("{}.log", format_today()))).expect("Failed to read log file");
    assert!(content.contains("[ERROR]"));
    assert!(content.contains("compile failed for device NPU"));
    assert_eq!(content.lines().count(), 1);

    fs::remove_dir_all(&dir).ok();
}
