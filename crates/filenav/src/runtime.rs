use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing::info;

use crate::app::App;
use crate::infra::access::AccessRequest;
use crate::ui;

mod event;
mod key_handler;
pub mod mode;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) enum EventResult {
    Continue,
    Quit,
}

/// Runs the browser's event/render loop until the user confirms exit.
///
/// `access_requests` receives consent requests posted by the access gate;
/// each one is shown as an overlay and answered from the keyboard.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub async fn run(
    app: &mut App,
    mut access_requests: mpsc::UnboundedReceiver<AccessRequest>,
) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    // Crossterm reads block, so they run on a dedicated thread and reach the
    // async loop over a channel.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let shutdown = Arc::new(AtomicBool::new(false));
    event::spawn_event_reader(event_tx, Arc::clone(&shutdown));

    let mut tick = tokio::time::interval(TICK_INTERVAL);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    app.start();
    let loop_result = run_main_loop(
        app,
        &mut terminal,
        &mut event_rx,
        &mut access_requests,
        &mut tick,
    )
    .await;

    shutdown.store(true, Ordering::Relaxed);
    loop_result?;
    terminal.show_cursor()?;
    info!("storage browser closed");

    Ok(())
}

async fn run_main_loop(
    app: &mut App,
    terminal: &mut TuiTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<crossterm::event::Event>,
    access_requests: &mut mpsc::UnboundedReceiver<AccessRequest>,
    tick: &mut tokio::time::Interval,
) -> io::Result<()> {
    loop {
        app.apply_app_events();
        app.clear_expired_notice(std::time::Instant::now());
        render_frame(app, terminal)?;

        if matches!(
            event::process_events(app, event_rx, access_requests, tick).await,
            EventResult::Quit
        ) {
            break;
        }
    }

    Ok(())
}

fn render_frame(app: &mut App, terminal: &mut TuiTerminal) -> io::Result<()> {
    terminal.draw(|frame| {
        ui::render(frame, app.render_context());
    })?;

    Ok(())
}
