//! Command-line configuration.
//!
//! [`Cli`] is the raw `clap` surface; [`Config`] is the resolved form the
//! binary actually runs with.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

use crate::app::filenav_home;

/// Log file name created under `~/.filenav` when `--log-file` is omitted.
pub const DEFAULT_LOG_FILE_NAME: &str = "filenav.log";

/// Browse a storage tree from the terminal.
#[derive(Debug, Parser)]
#[command(name = "filenav", version, about)]
pub struct Cli {
    /// Storage root to browse. Defaults to your home directory.
    pub root: Option<PathBuf>,

    /// Treat storage access as already granted and skip the consent prompt.
    #[arg(long)]
    pub grant_access: bool,

    /// File that receives diagnostic logs.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Most verbose log level written (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: Level,
}

/// Failures while turning [`Cli`] arguments into a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot resolve storage root `{}`: {source}", path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("log file `{}` is a directory", .0.display())]
    LogFileIsDirectory(PathBuf),
}

/// Resolved runtime settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub grant_access: bool,
    pub log_file: PathBuf,
    pub log_level: Level,
    pub storage_root: PathBuf,
}

impl Config {
    /// Resolves defaults and relative paths from parsed arguments.
    ///
    /// The storage root is not required to exist; a missing root is reported
    /// by the browser itself.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the root cannot be made absolute or the
    /// log file path points at a directory.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let Cli {
            root,
            grant_access,
            log_file,
            log_level,
        } = cli;

        let root = root
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"));
        let storage_root = std::path::absolute(&root)
            .map_err(|source| ConfigError::InvalidRoot { path: root, source })?;

        let log_file = log_file.unwrap_or_else(|| filenav_home().join(DEFAULT_LOG_FILE_NAME));
        if log_file.is_dir() {
            return Err(ConfigError::LogFileIsDirectory(log_file));
        }

        Ok(Self {
            grant_access,
            log_file,
            log_level,
            storage_root,
        })
    }
}
