use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::ui::app::FetchOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// A fetch finished (successfully or not).
    FetchCompleted(FetchOutcome),
    /// The input thread stopped after a terminal error; no more keys will arrive.
    InputClosed,
}

/// Where the input thread reads terminal events from.
trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Start the input thread, which also emits a `Tick` every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            input_loop(CrosstermEvents, &event_tx, tick_rate, &stop_flag);
        });

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Forward key, resize and tick events until `stop` is set or the
/// receiver goes away. A poll or read error ends the loop with `InputClosed`.
fn input_loop<S: EventSource>(
    mut source: S,
    events: &Sender<AppEvent>,
    tick_rate: Duration,
    stop: &AtomicBool,
) {
    let mut last_tick = Instant::now();
    while !stop.load(Ordering::Relaxed) {
        // Short poll so the stop flag is checked frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match source.poll(timeout) {
            Ok(true) => match source.read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                Ok(_) => None,
                Err(err) => {
                    tracing::error!(error = %err, "terminal event read failed");
                    let _ = events.send(AppEvent::InputClosed);
                    return;
                }
            },
            Ok(false) => None,
            Err(err) => {
                tracing::error!(error = %err, "terminal event poll failed");
                let _ = events.send(AppEvent::InputClosed);
                return;
            }
        };

        if let Some(event) = forwarded {
            if events.send(event).is_err() {
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if events.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
