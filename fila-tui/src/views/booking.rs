//! Booking wizard
//!
//! Three steps: pick services, pick a barber, confirm with contact details.
//! Submitting POSTs the join request and hands the returned entry id to the
//! queue-status screen.

use shared::models::{QueueJoin, Service, User};
use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Services,
    Barbers,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmField {
    Name,
    Phone,
}

/// State for the booking wizard
#[derive(Debug)]
pub struct BookingView {
    pub step: BookingStep,

    pub services: Vec<Service>,
    pub services_loaded: bool,
    pub services_error: Option<String>,
    pub selected_services: Vec<i64>,
    pub cursor: usize,

    pub barbers: Vec<User>,
    pub barbers_loaded: bool,
    pub barber_cursor: usize,
    pub selected_barber: Option<i64>,

    pub name: Input,
    pub phone: Input,
    pub focus: ConfirmField,

    pub submitting: bool,
    pub notice: Option<String>,
}

impl Default for BookingView {
    fn default() -> Self {
        Self {
            step: BookingStep::Services,
            services: Vec::new(),
            services_loaded: false,
            services_error: None,
            selected_services: Vec::new(),
            cursor: 0,
            barbers: Vec::new(),
            barbers_loaded: false,
            barber_cursor: 0,
            selected_barber: None,
            name: Input::default(),
            phone: Input::default(),
            focus: ConfirmField::Name,
            submitting: false,
            notice: None,
        }
    }
}

impl BookingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to step one with a clean slate (returning to the start)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply the services read; a failure degrades to an empty list and the
    /// screen keeps rendering
    pub fn set_services(&mut self, result: Result<Vec<Service>, String>) {
        self.services_loaded = true;
        match result {
            Ok(services) => {
                self.services = services;
                self.services_error = None;
                // Selections may refer to services that no longer exist
                self.selected_services
                    .retain(|id| self.services.iter().any(|s| s.id == *id));
                self.clamp_cursors();
            }
            Err(message) => {
                self.services = Vec::new();
                self.services_error = Some(message);
            }
        }
    }

    pub fn set_barbers(&mut self, result: Result<Vec<User>, String>) {
        self.barbers_loaded = true;
        match result {
            Ok(barbers) => {
                self.barbers = barbers;
                self.clamp_cursors();
            }
            Err(_) => {
                self.barbers = Vec::new();
            }
        }
    }

    fn clamp_cursors(&mut self) {
        self.cursor = self.cursor.min(self.services.len().saturating_sub(1));
        self.barber_cursor = self.barber_cursor.min(self.barbers.len().saturating_sub(1));
    }

    pub fn move_cursor(&mut self, delta: i64) {
        let len = match self.step {
            BookingStep::Services => self.services.len(),
            BookingStep::Barbers => self.barbers.len(),
            BookingStep::Confirm => return,
        };
        if len == 0 {
            return;
        }

        let cursor = match self.step {
            BookingStep::Services => &mut self.cursor,
            BookingStep::Barbers => &mut self.barber_cursor,
            BookingStep::Confirm => unreachable!(),
        };
        *cursor = (*cursor as i64 + delta).rem_euclid(len as i64) as usize;
    }

    /// Toggle the highlighted service in or out of the selection
    pub fn toggle_service(&mut self) {
        let Some(service) = self.services.get(self.cursor) else {
            return;
        };
        let id = service.id;
        if let Some(pos) = self.selected_services.iter().position(|s| *s == id) {
            self.selected_services.remove(pos);
        } else {
            self.selected_services.push(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected_services.contains(&id)
    }

    fn selected(&self) -> impl Iterator<Item = &Service> {
        self.services
            .iter()
            .filter(|s| self.selected_services.contains(&s.id))
    }

    pub fn total_price(&self) -> f64 {
        self.selected().map(|s| s.price).sum()
    }

    pub fn total_duration(&self) -> i64 {
        self.selected().map(|s| s.avg_duration).sum()
    }

    /// Advance to the next step when the current one is satisfied; returns
    /// true on a step change
    pub fn advance(&mut self) -> bool {
        match self.step {
            BookingStep::Services if !self.selected_services.is_empty() => {
                self.step = BookingStep::Barbers;
                true
            }
            BookingStep::Barbers if self.selected_barber.is_some() => {
                self.step = BookingStep::Confirm;
                true
            }
            _ => false,
        }
    }

    /// Step back, keeping everything entered so far
    pub fn back(&mut self) -> bool {
        match self.step {
            BookingStep::Services => false,
            BookingStep::Barbers => {
                self.step = BookingStep::Services;
                true
            }
            BookingStep::Confirm => {
                self.step = BookingStep::Barbers;
                true
            }
        }
    }

    /// Pick the highlighted barber
    pub fn select_barber(&mut self) {
        if let Some(barber) = self.barbers.get(self.barber_cursor) {
            self.selected_barber = Some(barber.id);
        }
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            ConfirmField::Name => ConfirmField::Phone,
            ConfirmField::Phone => ConfirmField::Name,
        };
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
            && !self.name.value().trim().is_empty()
            && !self.phone.value().trim().is_empty()
            && self.selected_barber.is_some()
            && !self.selected_services.is_empty()
    }

    /// The join request. The API takes a single service, so this carries the
    /// first selected one.
    // TODO: send the whole selection once the API accepts a service list
    pub fn join_payload(&self) -> Option<QueueJoin> {
        if !self.can_submit() {
            return None;
        }
        Some(QueueJoin {
            client_name: self.name.value().trim().to_string(),
            client_phone: self.phone.value().trim().to_string(),
            barber_id: self.selected_barber?,
            service_id: *self.selected_services.first()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn service(id: i64, price: f64, avg_duration: i64) -> Service {
        Service {
            id,
            name: format!("service-{id}"),
            price,
            avg_duration,
            is_active: true,
        }
    }

    fn barber(id: i64) -> User {
        User {
            id,
            username: format!("barber-{id}"),
            name: format!("Barber {id}"),
            role: Role::Barber,
            is_online: true,
        }
    }

    fn type_text(input: &mut Input, text: &str) {
        for ch in text.chars() {
            input.handle(tui_input::InputRequest::InsertChar(ch));
        }
    }

    #[test]
    fn cannot_advance_without_a_selection() {
        let mut view = BookingView::new();
        view.set_services(Ok(vec![service(3, 40.0, 30)]));

        assert!(!view.advance());
        view.toggle_service();
        assert!(view.advance());
        assert_eq!(view.step, BookingStep::Barbers);
    }

    #[test]
    fn totals_cover_the_whole_selection() {
        let mut view = BookingView::new();
        view.set_services(Ok(vec![
            service(1, 40.0, 30),
            service(2, 25.0, 15),
            service(3, 10.0, 10),
        ]));

        view.toggle_service(); // service 1
        view.move_cursor(1);
        view.toggle_service(); // service 2

        assert_eq!(view.total_price(), 65.0);
        assert_eq!(view.total_duration(), 45);

        view.toggle_service(); // deselect service 2
        assert_eq!(view.total_price(), 40.0);
    }

    #[test]
    fn wizard_produces_the_contract_payload() {
        let mut view = BookingView::new();
        view.set_services(Ok(vec![service(1, 25.0, 15), service(3, 40.0, 30)]));
        view.move_cursor(1);
        view.toggle_service(); // select service 3
        assert!(view.advance());

        view.set_barbers(Ok(vec![barber(1), barber(2)]));
        view.move_cursor(1);
        view.select_barber(); // barber 2
        assert!(view.advance());

        type_text(&mut view.name, "Ana");
        type_text(&mut view.phone, "11999990000");

        let payload = view.join_payload().unwrap();
        assert_eq!(payload.client_name, "Ana");
        assert_eq!(payload.client_phone, "11999990000");
        assert_eq!(payload.barber_id, 2);
        assert_eq!(payload.service_id, 3);
    }

    #[test]
    fn submit_requires_both_contact_fields() {
        let mut view = BookingView::new();
        view.set_services(Ok(vec![service(3, 40.0, 30)]));
        view.toggle_service();
        view.advance();
        view.set_barbers(Ok(vec![barber(2)]));
        view.select_barber();
        view.advance();

        type_text(&mut view.name, "Ana");
        assert!(!view.can_submit());
        assert!(view.join_payload().is_none());

        type_text(&mut view.phone, "11999990000");
        assert!(view.can_submit());
    }

    #[test]
    fn failed_submit_leaves_the_form_intact() {
        let mut view = BookingView::new();
        view.set_services(Ok(vec![service(3, 40.0, 30)]));
        view.toggle_service();
        view.advance();
        view.set_barbers(Ok(vec![barber(2)]));
        view.select_barber();
        view.advance();
        type_text(&mut view.name, "Ana");
        type_text(&mut view.phone, "11999990000");

        view.submitting = true;
        // Write failed: the notice shows, the fields stay for a retry
        view.submitting = false;
        view.notice = Some("Could not join the queue. Try again.".to_string());

        assert_eq!(view.name.value(), "Ana");
        assert_eq!(view.phone.value(), "11999990000");
        assert!(view.can_submit());
    }

    #[test]
    fn read_failure_degrades_to_an_empty_list() {
        let mut view = BookingView::new();
        view.set_services(Err("connection refused".to_string()));

        assert!(view.services_loaded);
        assert!(view.services.is_empty());
        assert!(view.services_error.is_some());
        assert!(!view.advance());
    }

    #[test]
    fn back_keeps_earlier_answers() {
        let mut view = BookingView::new();
        view.set_services(Ok(vec![service(3, 40.0, 30)]));
        view.toggle_service();
        view.advance();
        view.set_barbers(Ok(vec![barber(2)]));
        view.select_barber();

        assert!(view.back());
        assert_eq!(view.step, BookingStep::Services);
        assert!(view.is_selected(3));
        assert_eq!(view.selected_barber, Some(2));
    }
}
