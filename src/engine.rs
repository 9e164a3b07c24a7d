//! Background driver: owns a [`Session`] on a worker thread and ticks it
//! at a fixed period.
//!
//! The worker is the session's only owner, so the single-threaded model of
//! [`crate::session`] carries over unchanged: editor events and ticks are
//! applied strictly in sequence on one thread, with no locking.  The
//! thread is a long-lived resource scoped to the [`EngineHandle`] —
//! dropping the handle stops and joins it, so no tick can fire against a
//! torn-down session.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::session::Session;
use crate::transform::SchemaTransform;

/// Delay between regeneration ticks unless the caller picks another one.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(300);

enum EditorEvent {
    Changed(String),
    Blurred,
    Stop,
}

/// Handle to a session driven by a background ticker thread.
pub struct EngineHandle {
    tx: Sender<EditorEvent>,
    worker: Option<JoinHandle<()>>,
}

/// Move `session` onto a worker thread that applies editor events as they
/// arrive and ticks every `period`.
///
/// Event ordering matches the cooperative model: a `text_changed` sent
/// through the handle is applied (including the first-change propagation)
/// before any later tick.
pub fn spawn<T>(mut session: Session<T>, period: Duration) -> EngineHandle
where
    T: SchemaTransform + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        let start = Instant::now();
        let mut next_tick = start + period;
        loop {
            let now = Instant::now();
            if now >= next_tick {
                session.tick(now.duration_since(start).as_secs_f64());
                // Re-anchor rather than accumulate, in case a slow
                // transform overran the period.
                next_tick = Instant::now() + period;
            }
            let wait = next_tick.saturating_duration_since(Instant::now());
            match rx.recv_timeout(wait) {
                Ok(EditorEvent::Changed(text)) => session.text_changed(&text),
                Ok(EditorEvent::Blurred) => {
                    session.text_blurred(Instant::now().duration_since(start).as_secs_f64());
                }
                Ok(EditorEvent::Stop) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
        }
    });
    EngineHandle {
        tx,
        worker: Some(worker),
    }
}

impl EngineHandle {
    /// Forward an edit from the editing surface.
    pub fn text_changed(&self, text: impl Into<String>) {
        let _ = self.tx.send(EditorEvent::Changed(text.into()));
    }

    /// Forward a loss of focus from the editing surface.
    pub fn text_blurred(&self) {
        let _ = self.tx.send(EditorEvent::Blurred);
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        let _ = self.tx.send(EditorEvent::Stop);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
