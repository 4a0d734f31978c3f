use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;
use tracing::debug;

use crate::app::App;
use crate::infra::access::AccessRequest;
use crate::runtime::{EventResult, key_handler};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Forwards crossterm events to `event_tx` until `shutdown` is set or the
/// receiver goes away.
pub(crate) fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>, shutdown: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            match crossterm::event::poll(EVENT_POLL_TIMEOUT) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

/// Waits for the next terminal event, access request, or tick and applies
/// everything that is already queued.
pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    access_requests: &mut mpsc::UnboundedReceiver<AccessRequest>,
    tick: &mut tokio::time::Interval,
) -> EventResult {
    enum LoopSignal {
        AccessRequest(Option<AccessRequest>),
        Event(Option<Event>),
        Tick,
    }

    // Yielding here lets the spawned access task deliver its answer.
    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Event(event),
        request = access_requests.recv() => LoopSignal::AccessRequest(request),
        _ = tick.tick() => LoopSignal::Tick,
    };
    match signal {
        LoopSignal::AccessRequest(Some(request)) => {
            debug!(rationale = request.rationale, "showing access request");
            app.show_access_request(request);
        }
        LoopSignal::Event(Some(event)) => {
            if matches!(process_event(app, event), EventResult::Quit) {
                return EventResult::Quit;
            }
        }
        LoopSignal::AccessRequest(None) | LoopSignal::Event(None) | LoopSignal::Tick => {}
    }

    // Drain queued keys before the next frame so fast typing is not
    // throttled to one key per render.
    while let Ok(event) = event_rx.try_recv() {
        if matches!(process_event(app, event), EventResult::Quit) {
            return EventResult::Quit;
        }
    }

    EventResult::Continue
}

fn process_event(app: &mut App, event: Event) -> EventResult {
    if let Event::Key(key) = event {
        return key_handler::handle_key_event(app, key);
    }

    EventResult::Continue
}
