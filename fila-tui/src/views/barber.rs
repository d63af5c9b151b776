//! Barber dashboard
//!
//! Two tabs: the live queue with call/finish/cancel actions, and the
//! performance stats. The online flag shown in the header only ever comes
//! from a server profile fetch — a toggle is not reflected until the
//! confirming re-fetch lands.

use shared::models::{BarberDashboard, QueueItem, QueueStatus, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarberTab {
    Queue,
    Results,
}

/// Periods offered by the results tab
pub const STATS_PERIODS: [u32; 3] = [7, 14, 30];

/// The transition a barber's main action requests for an entry, if any
pub fn advance_target(status: QueueStatus) -> Option<QueueStatus> {
    match status {
        QueueStatus::Waiting => Some(QueueStatus::InProgress),
        QueueStatus::InProgress => Some(QueueStatus::Done),
        QueueStatus::Done | QueueStatus::Cancelled => None,
    }
}

/// Cancellation is only offered before an entry reaches a terminal state;
/// the server still has the final word
pub fn can_cancel(status: QueueStatus) -> bool {
    matches!(status, QueueStatus::Waiting | QueueStatus::InProgress)
}

/// State for the barber dashboard
#[derive(Debug)]
pub struct BarberView {
    pub tab: BarberTab,

    pub queue: Vec<QueueItem>,
    pub queue_loaded: bool,
    pub queue_error: Option<String>,
    pub cursor: usize,

    /// Authoritative profile from the last server fetch; the header falls
    /// back to the login snapshot until the first poll lands
    pub profile: Option<User>,
    pub toggling: bool,

    pub stats: Option<BarberDashboard>,
    pub stats_days: u32,
    pub stats_loading: bool,

    pub notice: Option<String>,
}

impl Default for BarberView {
    fn default() -> Self {
        Self {
            tab: BarberTab::Queue,
            queue: Vec::new(),
            queue_loaded: false,
            queue_error: None,
            cursor: 0,
            profile: None,
            toggling: false,
            stats: None,
            stats_days: STATS_PERIODS[0],
            stats_loading: false,
            notice: None,
        }
    }
}

impl BarberView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the queue read; a failure keeps the last list on screen
    pub fn set_queue(&mut self, result: Result<Vec<QueueItem>, String>) {
        self.queue_loaded = true;
        match result {
            Ok(queue) => {
                self.queue = queue;
                self.queue_error = None;
                self.cursor = self.cursor.min(self.queue.len().saturating_sub(1));
            }
            Err(message) => {
                self.queue_error = Some(message);
            }
        }
    }

    pub fn move_cursor(&mut self, delta: i64) {
        if self.queue.is_empty() {
            return;
        }
        self.cursor =
            (self.cursor as i64 + delta).rem_euclid(self.queue.len() as i64) as usize;
    }

    pub fn selected(&self) -> Option<&QueueItem> {
        self.queue.get(self.cursor)
    }

    /// Confirmed profile from a server fetch
    pub fn apply_profile(&mut self, user: User) {
        self.profile = Some(user);
        self.toggling = false;
    }

    /// The flag shown in the header; `fallback` is the login snapshot
    pub fn is_online(&self, fallback: &User) -> bool {
        self.profile
            .as_ref()
            .map(|p| p.is_online)
            .unwrap_or(fallback.is_online)
    }

    /// Next stats period: 7 → 14 → 30 → 7
    pub fn cycle_days(&mut self) -> u32 {
        let index = STATS_PERIODS
            .iter()
            .position(|d| *d == self.stats_days)
            .unwrap_or(0);
        self.stats_days = STATS_PERIODS[(index + 1) % STATS_PERIODS.len()];
        self.stats_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn entry(id: i64, status: QueueStatus) -> QueueItem {
        QueueItem {
            id,
            client_name: format!("client-{id}"),
            client_phone: "11999990000".to_string(),
            status,
            barber_id: 2,
            service_id: 3,
            people_ahead: None,
            service: None,
            barber: None,
        }
    }

    fn barber(is_online: bool) -> User {
        User {
            id: 2,
            username: "joao".to_string(),
            name: "João".to_string(),
            role: Role::Barber,
            is_online,
        }
    }

    #[test]
    fn actions_follow_the_server_status() {
        assert_eq!(
            advance_target(QueueStatus::Waiting),
            Some(QueueStatus::InProgress)
        );
        assert_eq!(
            advance_target(QueueStatus::InProgress),
            Some(QueueStatus::Done)
        );
        assert_eq!(advance_target(QueueStatus::Done), None);
        assert_eq!(advance_target(QueueStatus::Cancelled), None);

        assert!(can_cancel(QueueStatus::Waiting));
        assert!(can_cancel(QueueStatus::InProgress));
        assert!(!can_cancel(QueueStatus::Done));
        assert!(!can_cancel(QueueStatus::Cancelled));
    }

    #[test]
    fn queue_shrinking_clamps_the_cursor() {
        let mut view = BarberView::new();
        view.set_queue(Ok(vec![
            entry(1, QueueStatus::Waiting),
            entry(2, QueueStatus::Waiting),
            entry(3, QueueStatus::Waiting),
        ]));
        view.move_cursor(2);
        assert_eq!(view.selected().unwrap().id, 3);

        view.set_queue(Ok(vec![entry(1, QueueStatus::Waiting)]));
        assert_eq!(view.selected().unwrap().id, 1);
    }

    #[test]
    fn queue_read_failure_keeps_the_last_list() {
        let mut view = BarberView::new();
        view.set_queue(Ok(vec![entry(1, QueueStatus::Waiting)]));
        view.set_queue(Err("timeout".to_string()));

        assert_eq!(view.queue.len(), 1);
        assert!(view.queue_error.is_some());
    }

    #[test]
    fn online_flag_never_flips_before_the_confirming_fetch() {
        let mut view = BarberView::new();
        let snapshot = barber(false);

        // Toggle requested; nothing confirmed yet
        view.toggling = true;
        assert!(!view.is_online(&snapshot));

        // Induced failure: flag still shows last-known-good
        view.toggling = false;
        view.notice = Some("Failed to update availability".to_string());
        assert!(!view.is_online(&snapshot));

        // Server confirms through the profile re-fetch
        view.apply_profile(barber(true));
        assert!(view.is_online(&snapshot));
    }

    #[test]
    fn stats_periods_cycle() {
        let mut view = BarberView::new();
        assert_eq!(view.stats_days, 7);
        assert_eq!(view.cycle_days(), 14);
        assert_eq!(view.cycle_days(), 30);
        assert_eq!(view.cycle_days(), 7);
    }
}
