use std::io;
use std::sync::Arc;

use clap::Parser;
use filenav::app::{App, AppServices};
use filenav::config::{Cli, Config};
use filenav::domain::access::AccessState;
use filenav::infra::access::PromptAccessGate;
use filenav::infra::filesystem::LocalFileSystem;
use filenav::infra::mount::LocalMountOracle;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_cli(Cli::parse())
        .map_err(|error| io::Error::other(format!("Error: {error}")))?;
    // Logging is best effort; the browser still runs without a log file.
    filenav::logging::init_or_warn(&config.log_file, config.log_level, &mut io::stderr());

    let initial_access_state = if config.grant_access {
        AccessState::Granted
    } else {
        AccessState::Unknown
    };
    let (access_request_tx, access_request_rx) = mpsc::unbounded_channel();
    let services = AppServices::new(
        Arc::new(PromptAccessGate::new(access_request_tx, initial_access_state)),
        Arc::new(LocalFileSystem),
        Arc::new(LocalMountOracle::new(config.storage_root.clone())),
    );
    let mut app = App::new(config.storage_root, services);

    filenav::runtime::run(&mut app, access_request_rx).await
}
