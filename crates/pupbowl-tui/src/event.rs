//! Terminal input plus the two clocks the app runs on.
//!
//! A background task merges crossterm key/resize events with a slow
//! tick (toast expiry) and a fast render clock. Dropping the
//! [`EventReader`] stops the task.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Slow clock; expires notifications.
    Tick,
    /// Redraw request.
    Render,
}

/// How often each clock fires.
#[derive(Debug, Clone, Copy)]
pub struct Rates {
    pub tick: Duration,
    pub render: Duration,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(250),
            render: Duration::from_millis(33),
        }
    }
}

/// Only key presses and resizes reach the app.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}

fn clock(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    _guard: DropGuard,
}

impl EventReader {
    pub fn spawn(rates: Rates) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        tokio::spawn(pump(tx, cancel.clone(), rates));

        Self {
            rx,
            _guard: cancel.drop_guard(),
        }
    }

    /// Next event, or `None` once the reader task has ended.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

async fn pump(tx: mpsc::UnboundedSender<Event>, cancel: CancellationToken, rates: Rates) {
    let mut input = EventStream::new();
    let mut tick = clock(rates.tick);
    let mut render = clock(rates.render);

    loop {
        let event = tokio::select! {
            () = cancel.cancelled() => return,
            _ = tick.tick() => Event::Tick,
            _ = render.tick() => Event::Render,
            Some(Ok(raw)) = input.next() => match translate(raw) {
                Some(event) => event,
                None => continue,
            },
        };

        if tx.send(event).is_err() {
            return;
        }
    }
}
