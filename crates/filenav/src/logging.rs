use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Installs the global `tracing` subscriber, appending to `log_file`.
///
/// The terminal belongs to the UI, so logs never go to stdout or stderr.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(log_file: &Path, level: Level) -> io::Result<()> {
    let file = open_log_file(log_file)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(io::Error::other)
}

/// Runs [`init`] and reports a failure on `warnings` instead of returning it.
///
/// The warning is written before the TUI takes over the terminal, so it stays
/// in the shell scrollback.
pub fn init_or_warn(log_file: &Path, level: Level, warnings: &mut impl Write) {
    if let Err(error) = init(log_file, level) {
        let _ = writeln!(
            warnings,
            "Warning: logging disabled, cannot open {}: {error}",
            log_file.display()
        );
    }
}

/// Opens `log_file` for appending, creating missing parent directories.
fn open_log_file(log_file: &Path) -> io::Result<File> {
    if let Some(parent) = log_file.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(log_file)
}
