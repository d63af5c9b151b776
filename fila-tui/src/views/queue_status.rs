//! Queue-status screen
//!
//! Reflects one queue entry's authoritative status to the waiting customer.
//! Everything shown here came from the server on the last poll; the screen
//! never advances the status on its own.

use chrono::{DateTime, Local};
use shared::models::{QueueItem, QueueStatus};

/// Presentation tone for a queue status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Active,
    Completed,
    Error,
}

/// The one status-to-tone mapping the screen uses
pub fn status_tone(status: QueueStatus) -> StatusTone {
    match status {
        QueueStatus::Waiting => StatusTone::Pending,
        QueueStatus::InProgress => StatusTone::Active,
        QueueStatus::Done => StatusTone::Completed,
        QueueStatus::Cancelled => StatusTone::Error,
    }
}

pub fn status_label(status: QueueStatus) -> &'static str {
    match status {
        QueueStatus::Waiting => "Waiting",
        QueueStatus::InProgress => "In progress",
        QueueStatus::Done => "Done",
        QueueStatus::Cancelled => "Cancelled",
    }
}

/// Phrase for the people-ahead count while WAITING; zero is its own
/// message, never "0 people ahead"
pub fn ahead_message(people_ahead: i64) -> String {
    match people_ahead {
        0 => "You're next!".to_string(),
        1 => "1 person ahead of you".to_string(),
        n => format!("{n} people ahead of you"),
    }
}

/// State for the queue-status screen
#[derive(Debug)]
pub struct QueueStatusView {
    pub entry_id: i64,
    /// Ties poll responses to this mount of the screen; responses from an
    /// earlier mount are discarded upstream
    pub generation: u64,
    pub item: Option<QueueItem>,
    pub error: Option<String>,
    pub last_update: Option<DateTime<Local>>,
}

impl QueueStatusView {
    pub fn new(entry_id: i64, generation: u64) -> Self {
        Self {
            entry_id,
            generation,
            item: None,
            error: None,
            last_update: None,
        }
    }

    /// Apply a poll result
    pub fn apply(&mut self, result: Result<QueueItem, String>) {
        match result {
            Ok(item) => {
                self.item = Some(item);
                self.error = None;
                self.last_update = Some(Local::now());
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    /// Terminal error screen: the entry could never be loaded (bad id, API
    /// down). Offers the way back to the start instead of silent retries.
    pub fn load_failed(&self) -> bool {
        self.item.is_none() && self.error.is_some()
    }
}
