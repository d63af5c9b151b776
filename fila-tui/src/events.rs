//! Event handling for the Fila TUI
//!
//! Terminal input and API results multiplex over one channel into the
//! draw/update loop. Background fetches never touch app state directly;
//! they send a [`DataEvent`] and the loop applies it.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use fila_client::LoginResponse;
use shared::models::{AdminDashboard, BarberDashboard, QueueItem, Service, User};
use tokio::sync::mpsc;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for periodic redraws
    Tick,
    /// Result from the API layer
    Data(DataEvent),
}

/// Results coming back from the API layer
///
/// Events for polled views carry the owning view's generation (or filter
/// revision); the loop discards anything that no longer matches, so a
/// response landing after its view unmounted cannot touch unrelated state.
#[derive(Debug)]
pub enum DataEvent {
    Services {
        result: Result<Vec<Service>, String>,
    },
    Barbers {
        result: Result<Vec<User>, String>,
    },
    Users {
        result: Result<Vec<User>, String>,
    },
    LoggedIn {
        result: Result<LoginResponse, String>,
    },
    QueueJoined {
        result: Result<QueueItem, String>,
    },
    QueueStatus {
        generation: u64,
        result: Result<QueueItem, String>,
    },
    BarberQueue {
        result: Result<Vec<QueueItem>, String>,
    },
    QueueUpdated {
        result: Result<QueueItem, String>,
    },
    Profile {
        result: Result<User, String>,
    },
    ToggleFailed {
        message: String,
    },
    BarberStats {
        days: u32,
        result: Result<BarberDashboard, String>,
    },
    AdminStats {
        revision: u64,
        result: Result<AdminDashboard, String>,
    },
    ServiceSaved {
        result: Result<Service, String>,
    },
    ServiceDeleted {
        result: Result<i64, String>,
    },
    UserSaved {
        result: Result<User, String>,
    },
    UserDeleted {
        result: Result<i64, String>,
    },
}

/// Event handler that polls for terminal events and carries data events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        // Terminal events are polled on a dedicated task so the main loop
        // only ever awaits the channel
        tokio::task::spawn_blocking(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(w, h)) => {
                            if event_tx.send(AppEvent::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else if event_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Sender handed to the API layer for data events
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}
