//! Event plumbing and async task lifecycle for the dispatch loop.

use std::future::Future;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::action::Action;
use crate::api::WeatherClient;
use crate::effect::Effect;

/// Timeout passed to each `crossterm::event::poll` call.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);
/// Sleep between poll cycles.
const LOOP_SLEEP: Duration = Duration::from_millis(16);
/// Upper bound on events drained per poll cycle.
const MAX_EVENTS_PER_BATCH: usize = 20;

/// Terminal event after processing.
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Spawn the terminal event polling task.
///
/// Polls crossterm with a short timeout and forwards key, mouse and resize
/// events over the channel until the token is cancelled. On cancel the
/// crossterm buffer is drained so no input leaks into the parent shell.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(LOOP_SLEEP) => {
                    let mut drained = 0;
                    while drained < MAX_EVENTS_PER_BATCH
                        && event::poll(POLL_TIMEOUT).unwrap_or(false)
                    {
                        drained += 1;
                        if let Ok(evt) = event::read() {
                            let kind = match evt {
                                event::Event::Key(key) => Some(EventKind::Key(key)),
                                event::Event::Mouse(mouse) => Some(EventKind::Mouse(mouse)),
                                event::Event::Resize(w, h) => Some(EventKind::Resize(w, h)),
                                _ => None,
                            };
                            if let Some(kind) = kind {
                                if tx.send(kind).is_err() {
                                    debug!("event channel closed, stopping poller");
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Spawn the animation tick, emitting [`Action::Tick`] at a fixed period.
pub fn spawn_tick(tx: mpsc::UnboundedSender<Action>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Action::Tick).is_err() {
                break;
            }
        }
    })
}

/// Spawns effect futures that resolve to a result action.
///
/// In-flight tasks are never keyed or cancelled: overlapping fetches race,
/// and whichever result arrives last owns the display. `cancel_all` exists
/// only for shutdown.
pub struct Tasks {
    action_tx: mpsc::UnboundedSender<Action>,
    handles: Vec<AbortHandle>,
}

impl Tasks {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            handles: Vec::new(),
        }
    }

    /// Spawn a future whose output is sent over the action channel.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let _ = tx.send(future.await);
        });
        self.handles.push(handle.abort_handle());
    }

    /// Abort every running task.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Tasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Handle an effect emitted by the reducer.
pub fn handle_effect(effect: Effect, client: &WeatherClient, tasks: &mut Tasks) {
    match effect {
        Effect::FetchWeather { city } => {
            let client = client.clone();
            tasks.spawn(async move {
                match client.current_weather(&city).await {
                    Ok(reading) => Action::WeatherDidLoad(reading),
                    Err(err) => Action::WeatherDidError(err.to_string()),
                }
            });
        }
    }
}
