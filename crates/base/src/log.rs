use {
    ::log::{LevelFilter, Log, Metadata, Record},
    std::{
        fs::{File, OpenOptions, create_dir_all},
        io::Write,
        path::PathBuf,
        sync::{
            Mutex,
            atomic::{AtomicBool, Ordering},
        },
        time::{SystemTime, UNIX_EPOCH},
    },
};

/// Writes log records to stderr, leaving stdout to the benchmark report.
pub struct StderrLogger;

/// Writes log records to `<dir>/YYYY-MM-DD.log`, rolling over at midnight UTC.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        create_dir_all(&dir)?;
        let current_date = format_today();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(format!("{}.log", current_date)))?;
        Ok(FileLogger {
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] [thread:{:?}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stderr().flush().ok();
    }
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let today = format_today();
        if today != state.current_date {
            let new_path = state.dir.join(format!("{}.log", today));
            match OpenOptions::new().create(true).append(true).open(&new_path) {
                Ok(new_file) => {
                    state.file = new_file;
                    state.current_date = today;
                }
                Err(error) => {
                    // keep writing to the old file
                    eprintln!("Failed to open new log file {:?}: {}", new_path, error);
                }
            }
        }
        let line = format!("{}\n", format_record(record));
        if let Err(error) = state.file.write_all(line.as_bytes()) {
            eprintln!("Failed to write to log file: {}", error);
            eprintln!("{}", line.trim_end());
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

/// Format current time as YYYY-MM-DDTHH:MM:SS (UTC)
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Format current date as YYYY-MM-DD (UTC)
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_seconds() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}

// Howard Hinnant's days-to-civil algorithm
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// Debug builds log everything, release builds drop debug records.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

static FILE_LOGGING: AtomicBool = AtomicBool::new(false);

/// True once `init_file_logger` has installed a `FileLogger`.
pub fn logs_to_file() -> bool {
    FILE_LOGGING.load(Ordering::Relaxed)
}

/// Install `StderrLogger` as the global logger. Later calls are ignored.
pub fn init_stderr_logger() {
    static LOGGER: StderrLogger = StderrLogger;
    if ::log::set_logger(&LOGGER).is_ok() {
        ::log::set_max_level(default_level());
    }
}

/// Install a `FileLogger` writing into `dir` as the global logger.
///
/// Fails if the directory cannot be created. If a logger is already
/// installed the new one is dropped silently.
pub fn init_file_logger(dir: impl Into<PathBuf>) -> std::io::Result<()> {
    let logger = FileLogger::new(dir)?;
    if ::log::set_logger(Box::leak(Box::new(logger))).is_ok() {
        ::log::set_max_level(default_level());
        FILE_LOGGING.store(true, Ordering::Relaxed);
    }
    Ok(())
}

/// Print `fatal: <message>` to stderr. With a `FileLogger` installed the
/// message is also logged at error level; with the stderr logger it is not.
pub fn report_fatal(message: &str) {
    if logs_to_file() {
        ::log::error!("{}", message);
        ::log::logger().flush();
    }
    eprintln!("fatal: {}", message);
    let _ = std::io::stdout().flush();
}

/// Report a fatal error and exit with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::report_fatal(&format!($($arg)*));
        std::process::exit(1);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_from_days_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn test_civil_from_days_leap_year() {
        // 2000-02-29
        assert_eq!(civil_from_days(11016), (2000, 2, 29));
    }

    #[test]
    fn test_format_timestamp_structure() {
        let ts = format_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[16..17], ":");
    }

    #[test]
    fn test_file_logger_day_rollover() {
        let dir = std::env::temp_dir().join(format!("bench-log-test-{}-rollover", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let logger = FileLogger::new(&dir).expect("Failed to create FileLogger");

        // pretend the logger was opened yesterday
        let stale = dir.join("1999-01-01.log");
        {
            let mut state = logger.state.lock().unwrap();
            state.current_date = "1999-01-01".to_string();
            state.file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&stale)
                .unwrap();
        }

        let record = ::log::RecordBuilder::new()
            .level(::log::Level::Info)
            .file(Some("test.rs"))
            .line(Some(1))
            .args(format_args!("after rollover"))
            .build();
        logger.log(&record);
        logger.flush();

        let today = dir.join(format!("{}.log", format_today()));
        let content = std::fs::read_to_string(&today).expect("today's log file");
        assert!(content.contains("after rollover"));
        assert_eq!(std::fs::read_to_string(&stale).unwrap(), "");
        assert_eq!(logger.state.lock().unwrap().current_date, format_today());

        std::fs::remove_dir_all(&dir).ok();
    }
}
