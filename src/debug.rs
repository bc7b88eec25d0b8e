//! Unified logging bridge for glyphdeck.
//!
//! Routes all `log::info!()` etc. to a session log file in the temp
//! directory, keeping diagnostic output away from stdout. When `RUST_LOG`
//! is set the messages are also mirrored to stderr for terminal debugging.
//! The CLI `--log-level` flag takes highest precedence, then `RUST_LOG`,
//! then the default (warn).

use log::{Level, LevelFilter, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    file: Option<Mutex<File>>,
    mirror_stderr: bool,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{}] [{}] {}\n",
            timestamp(),
            level_str(record.level()),
            record.target(),
            record.args()
        );
        if let Some(ref file) = self.file {
            let mut file = file.lock();
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(ref file) = self.file {
            let _ = file.lock().flush();
        }
    }
}

fn level_str(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn log_path() -> std::path::PathBuf {
    #[cfg(unix)]
    {
        std::path::PathBuf::from("/tmp/glyphdeck_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("glyphdeck_debug.log")
    }
}

/// Parse a level name as used by `--log-level` and `RUST_LOG`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Initialize the logging bridge. Safe to call once per process; a second
/// call is a no-op.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let env_level = std::env::var("RUST_LOG").ok();
    let level = cli_level
        .or_else(|| env_level.as_deref().and_then(parse_level))
        .unwrap_or(LevelFilter::Warn);

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path())
        .ok();
    if let Some(ref f) = file {
        let mut f = f;
        let _ = writeln!(
            f,
            "{}\nglyphdeck session started at {} (level={level})\n{}",
            "=".repeat(80),
            timestamp(),
            "=".repeat(80)
        );
    }

    let bridge = LogBridge {
        file: file.map(Mutex::new),
        mirror_stderr: env_level.is_some(),
    };

    if log::set_boxed_logger(Box::new(bridge)).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_names() {
        assert_eq!(parse_level("info"), Some(LevelFilter::Info));
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" trace "), Some(LevelFilter::Trace));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        let (secs, micros) = ts.split_once('.').unwrap();
        assert!(secs.parse::<u64>().is_ok());
        assert_eq!(micros.len(), 6);
    }
}
