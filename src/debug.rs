// Debug logging module for Carrom Arcade
// File-based tracing output that can be enabled via --debug flag.
// Nothing may be written to stdout/stderr while the TUI owns the terminal.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use tracing_subscriber::filter::LevelFilter;

const LOG_FILE_NAME: &str = "carrom-arcade-debug.log";

/// Where `--debug` writes its log
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Initialize debug logging to file
///
/// # Arguments
/// * `enabled` - Whether debug logging should be enabled (controlled by --debug flag)
///
/// # Behavior
/// - If enabled=false: Returns immediately, no file created, tracing events go nowhere
/// - If enabled=true: Creates/truncates the log file, writes a header and installs
///   a global subscriber at DEBUG level writing plain (non-ANSI) lines to it
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== Carrom Arcade Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    let installed = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init();

    // A subscriber already set (tests, embedding) keeps receiving events
    if installed.is_ok() {
        tracing::info!(path = %path.display(), "debug logging initialized");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_creates_nothing() {
        assert!(init(false).is_ok());
    }

    #[test]
    fn test_log_path_in_temp_dir() {
        let path = log_file_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(LOG_FILE_NAME));
    }
}
