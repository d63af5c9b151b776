//! Application state for the Fila TUI
//!
//! Routes key events into the active screen, applies data events coming
//! back from the API layer, and owns the pollers so that leaving a screen
//! tears its timer down.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fila_client::{LoginResponse, Poller, Session};
use tui_input::backend::crossterm::EventHandler as _;

use crate::data::DataClient;
use crate::events::DataEvent;
use crate::views::admin::{AdminMode, AdminTab, FilterField, StaffForm};
use crate::views::barber::{BarberTab, advance_target, can_cancel};
use crate::views::booking::{BookingStep, ConfirmField};
use crate::views::login::LoginField;
use crate::views::{AdminView, BarberView, BookingView, LoginView, QueueStatusView};
use shared::models::QueueStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Booking,
    QueueStatus,
    Login,
    Barber,
    Admin,
}

/// Main application state
pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub session: Option<Session>,

    pub booking: BookingView,
    pub login: LoginView,
    pub queue_status: QueueStatusView,
    pub barber: BarberView,
    pub admin: AdminView,

    data: DataClient,

    // Each polling view owns its timer; dropping the handle stops the loop
    status_poller: Option<Poller>,
    queue_poller: Option<Poller>,
    profile_poller: Option<Poller>,

    /// Bumped on every queue-status mount; poll responses carrying an older
    /// generation are discarded
    status_generation: u64,
}

impl App {
    pub fn new(data: DataClient) -> Self {
        Self {
            running: true,
            screen: Screen::Booking,
            session: None,
            booking: BookingView::new(),
            login: LoginView::new(),
            queue_status: QueueStatusView::new(0, 0),
            barber: BarberView::new(),
            admin: AdminView::new(),
            data,
            status_poller: None,
            queue_poller: None,
            profile_poller: None,
            status_generation: 0,
        }
    }

    // ========== Screen transitions ==========

    /// Back to the start of the public flow
    pub fn open_booking(&mut self) {
        self.status_poller = None;
        self.booking.reset();
        self.screen = Screen::Booking;
        self.data.load_services(false);
    }

    /// Track one queue entry; a new mount gets a new generation so late
    /// responses from the previous one cannot land here
    pub fn open_queue_status(&mut self, entry_id: i64) {
        self.status_generation += 1;
        self.queue_status = QueueStatusView::new(entry_id, self.status_generation);
        self.status_poller = Some(
            self.data
                .start_queue_status_poller(entry_id, self.status_generation),
        );
        self.screen = Screen::QueueStatus;
    }

    fn open_login(&mut self) {
        self.login.reset();
        self.screen = Screen::Login;
    }

    fn complete_login(&mut self, response: LoginResponse) {
        let session = Session::from_login(response);
        self.data = self.data.with_token(session.token());

        let user_id = session.user_id();
        let is_admin = session.is_admin();
        self.session = Some(session);
        self.login.reset();
        self.status_poller = None;

        if is_admin {
            self.admin = AdminView::new();
            self.screen = Screen::Admin;
            let revision = self.admin.bump_filters();
            self.data
                .load_admin_stats(self.admin.filters(), revision, false);
            // The overview's service filter and the services tab share one read
            self.data.load_services(false);
            self.data.load_users(false);
        } else {
            self.barber = BarberView::new();
            self.screen = Screen::Barber;
            self.queue_poller = Some(self.data.start_barber_queue_poller());
            self.profile_poller = Some(self.data.start_profile_poller(user_id));
        }
    }

    fn logout(&mut self) {
        self.session = None;
        self.data = self.data.without_token();
        self.queue_poller = None;
        self.profile_poller = None;
        self.open_booking();
    }

    // ========== Key handling ==========

    pub fn on_key(&mut self, key: KeyEvent) {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.screen {
            Screen::Booking => self.booking_key(key),
            Screen::QueueStatus => self.queue_status_key(key),
            Screen::Login => self.login_key(key),
            Screen::Barber => self.barber_key(key),
            Screen::Admin => self.admin_key(key),
        }
    }

    fn booking_key(&mut self, key: KeyEvent) {
        match self.booking.step {
            BookingStep::Services => match key.code {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('l') => self.open_login(),
                KeyCode::Char('r') => self.data.load_services(true),
                KeyCode::Up | KeyCode::Char('k') => self.booking.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.booking.move_cursor(1),
                KeyCode::Char(' ') => self.booking.toggle_service(),
                KeyCode::Enter => {
                    if self.booking.advance() {
                        self.data.load_barbers(false);
                    }
                }
                _ => {}
            },
            BookingStep::Barbers => match key.code {
                KeyCode::Esc => {
                    self.booking.back();
                }
                KeyCode::Up | KeyCode::Char('k') => self.booking.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.booking.move_cursor(1),
                KeyCode::Char(' ') => self.booking.select_barber(),
                KeyCode::Enter => {
                    self.booking.select_barber();
                    self.booking.advance();
                }
                _ => {}
            },
            BookingStep::Confirm => match key.code {
                KeyCode::Esc => {
                    self.booking.back();
                }
                KeyCode::Tab => self.booking.switch_focus(),
                KeyCode::Enter => {
                    if let Some(payload) = self.booking.join_payload() {
                        self.booking.submitting = true;
                        self.booking.notice = None;
                        self.data.join_queue(payload);
                    }
                }
                _ => {
                    let event = CrosstermEvent::Key(key);
                    match self.booking.focus {
                        ConfirmField::Name => {
                            self.booking.name.handle_event(&event);
                        }
                        ConfirmField::Phone => {
                            self.booking.phone.handle_event(&event);
                        }
                    }
                }
            },
        }
    }

    fn queue_status_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc | KeyCode::Char('b') => self.open_booking(),
            // The terminal error screen's recovery action
            KeyCode::Enter if self.queue_status.load_failed() => self.open_booking(),
            _ => {}
        }
    }

    fn login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.open_booking(),
            KeyCode::Tab => self.login.switch_focus(),
            KeyCode::Enter => match self.login.focus {
                Some(LoginField::Username) => self.login.focus = Some(LoginField::Password),
                _ => {
                    if let Some((username, password)) = self.login.credentials() {
                        self.login.submitting = true;
                        self.login.error = None;
                        self.data.login(username, password);
                    }
                }
            },
            _ => {
                let event = CrosstermEvent::Key(key);
                match self.login.focus {
                    Some(LoginField::Password) => {
                        self.login.password.handle_event(&event);
                    }
                    _ => {
                        self.login.username.handle_event(&event);
                    }
                }
            }
        }
    }

    fn barber_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.logout();
                return;
            }
            KeyCode::Char('1') => {
                self.barber.tab = BarberTab::Queue;
                return;
            }
            KeyCode::Char('2') | KeyCode::Tab => {
                self.switch_barber_tab();
                return;
            }
            KeyCode::Char('o') => {
                self.request_online_toggle();
                return;
            }
            _ => {}
        }

        match self.barber.tab {
            BarberTab::Queue => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.barber.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.barber.move_cursor(1),
                // Call a waiting client / finish the one in the chair
                KeyCode::Enter | KeyCode::Char('c') => {
                    let action = self
                        .barber
                        .selected()
                        .and_then(|item| advance_target(item.status).map(|t| (item.id, t)));
                    if let Some((id, target)) = action {
                        self.barber.notice = None;
                        self.data.update_queue_status(id, target);
                    }
                }
                KeyCode::Char('x') => {
                    let cancellable = self
                        .barber
                        .selected()
                        .filter(|item| can_cancel(item.status))
                        .map(|item| item.id);
                    if let Some(id) = cancellable {
                        self.barber.notice = None;
                        self.data.update_queue_status(id, QueueStatus::Cancelled);
                    }
                }
                _ => {}
            },
            BarberTab::Results => {
                if key.code == KeyCode::Char('d') {
                    let days = self.barber.cycle_days();
                    self.barber.stats_loading = true;
                    self.data.load_barber_stats(days, true);
                }
            }
        }
    }

    fn switch_barber_tab(&mut self) {
        match self.barber.tab {
            BarberTab::Queue => {
                self.barber.tab = BarberTab::Results;
                if self.barber.stats.is_none() && !self.barber.stats_loading {
                    self.barber.stats_loading = true;
                    self.data.load_barber_stats(self.barber.stats_days, false);
                }
            }
            BarberTab::Results => self.barber.tab = BarberTab::Queue,
        }
    }

    fn request_online_toggle(&mut self) {
        if self.barber.toggling {
            return;
        }
        if let Some(session) = &self.session {
            self.barber.toggling = true;
            self.barber.notice = None;
            self.data.toggle_online(session.user_id());
        }
    }

    fn admin_key(&mut self, key: KeyEvent) {
        if self.admin.mode == AdminMode::Editing {
            self.admin_editing_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.logout();
                return;
            }
            KeyCode::Char('1') => {
                self.set_admin_tab(AdminTab::Overview);
                return;
            }
            KeyCode::Char('2') => {
                self.set_admin_tab(AdminTab::Services);
                return;
            }
            KeyCode::Char('3') => {
                self.set_admin_tab(AdminTab::Staff);
                return;
            }
            KeyCode::Tab => {
                let next = match self.admin.tab {
                    AdminTab::Overview => AdminTab::Services,
                    AdminTab::Services => AdminTab::Staff,
                    AdminTab::Staff => AdminTab::Overview,
                };
                self.set_admin_tab(next);
                return;
            }
            _ => {}
        }

        match self.admin.tab {
            AdminTab::Overview => match key.code {
                KeyCode::Char('e') => self.admin.mode = AdminMode::Editing,
                KeyCode::Left => {
                    self.admin.cycle_service_filter(-1);
                    self.refresh_admin_stats();
                }
                KeyCode::Right => {
                    self.admin.cycle_service_filter(1);
                    self.refresh_admin_stats();
                }
                KeyCode::Char('r') => self.refresh_admin_stats(),
                _ => {}
            },
            AdminTab::Services => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.admin.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.admin.move_cursor(1),
                KeyCode::Char('n') => {
                    self.admin.service_form.clear();
                    self.admin.mode = AdminMode::Editing;
                }
                KeyCode::Char('e') => {
                    if let Some(service) = self.admin.selected_service() {
                        let service = service.clone();
                        self.admin.service_form.load(&service);
                        self.admin.mode = AdminMode::Editing;
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(service) = self.admin.selected_service() {
                        let id = service.id;
                        self.admin.notice = None;
                        self.data.delete_service(id);
                    }
                }
                _ => {}
            },
            AdminTab::Staff => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.admin.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.admin.move_cursor(1),
                KeyCode::Char('n') => {
                    self.admin.staff_form.clear();
                    self.admin.mode = AdminMode::Editing;
                }
                KeyCode::Char('e') => {
                    if let Some(user) = self.admin.selected_user() {
                        let user = user.clone();
                        self.admin.staff_form.load(&user);
                        self.admin.mode = AdminMode::Editing;
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(user) = self.admin.selected_user() {
                        let id = user.id;
                        self.admin.notice = None;
                        self.data.delete_user(id);
                    }
                }
                _ => {}
            },
        }
    }

    fn admin_editing_key(&mut self, key: KeyEvent) {
        match self.admin.tab {
            AdminTab::Overview => match key.code {
                KeyCode::Esc => self.admin.mode = AdminMode::Normal,
                KeyCode::Tab => self.admin.switch_filter_focus(),
                KeyCode::Enter => {
                    self.admin.mode = AdminMode::Normal;
                    self.refresh_admin_stats();
                }
                _ => {
                    let event = CrosstermEvent::Key(key);
                    match self.admin.filter_focus {
                        FilterField::Start => {
                            self.admin.start.handle_event(&event);
                        }
                        FilterField::End => {
                            self.admin.end.handle_event(&event);
                        }
                    }
                }
            },
            AdminTab::Services => match key.code {
                KeyCode::Esc => {
                    self.admin.mode = AdminMode::Normal;
                    self.admin.service_form.clear();
                }
                KeyCode::Tab => self.admin.service_form.next_field(),
                KeyCode::Enter => self.submit_service_form(),
                _ => {
                    self.admin
                        .service_form
                        .focused_input()
                        .handle_event(&CrosstermEvent::Key(key));
                }
            },
            AdminTab::Staff => match key.code {
                KeyCode::Esc => {
                    self.admin.mode = AdminMode::Normal;
                    self.admin.staff_form.clear();
                }
                KeyCode::Tab => self.admin.staff_form.next_field(),
                KeyCode::Enter => self.submit_staff_form(),
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
                    if self.admin.staff_form.focus == StaffForm::ROLE_FIELD =>
                {
                    self.admin.staff_form.toggle_role();
                }
                _ => {
                    if let Some(input) = self.admin.staff_form.focused_input() {
                        input.handle_event(&CrosstermEvent::Key(key));
                    }
                }
            },
        }
    }

    /// One committed filter change, one fetch, carrying the full current
    /// combination
    fn refresh_admin_stats(&mut self) {
        let revision = self.admin.bump_filters();
        self.data
            .load_admin_stats(self.admin.filters(), revision, true);
    }

    fn submit_service_form(&mut self) {
        if self.admin.service_form.editing.is_some() {
            match self.admin.service_form.update_payload() {
                Ok((id, update)) => {
                    self.admin.notice = None;
                    self.data.update_service(id, update);
                }
                Err(message) => self.admin.notice = Some(message),
            }
        } else {
            match self.admin.service_form.create_payload() {
                Ok(payload) => {
                    self.admin.notice = None;
                    self.data.create_service(payload);
                }
                Err(message) => self.admin.notice = Some(message),
            }
        }
    }

    fn submit_staff_form(&mut self) {
        if self.admin.staff_form.editing.is_some() {
            match self.admin.staff_form.update_payload() {
                Ok((id, update)) => {
                    self.admin.notice = None;
                    self.data.update_user(id, update);
                }
                Err(message) => self.admin.notice = Some(message),
            }
        } else {
            match self.admin.staff_form.create_payload() {
                Ok(payload) => {
                    self.admin.notice = None;
                    self.data.create_user(payload);
                }
                Err(message) => self.admin.notice = Some(message),
            }
        }
    }

    fn set_admin_tab(&mut self, tab: AdminTab) {
        self.admin.tab = tab;
        match tab {
            AdminTab::Services if !self.admin.services_loaded => self.data.load_services(false),
            AdminTab::Staff if !self.admin.users_loaded => self.data.load_users(false),
            _ => {}
        }
    }

    // ========== Data events ==========

    pub fn apply_data(&mut self, event: DataEvent) {
        match event {
            DataEvent::Services { result } => {
                self.admin.set_services(result.clone());
                self.booking.set_services(result);
            }
            DataEvent::Barbers { result } => self.booking.set_barbers(result),
            DataEvent::Users { result } => self.admin.set_users(result),
            DataEvent::LoggedIn { result } => match result {
                Ok(response) => self.complete_login(response),
                Err(message) => self.login.fail(message),
            },
            DataEvent::QueueJoined { result } => {
                self.booking.submitting = false;
                match result {
                    Ok(item) => self.open_queue_status(item.id),
                    Err(message) => {
                        self.booking.notice = Some(format!("Could not join the queue: {message}"));
                    }
                }
            }
            DataEvent::QueueStatus { generation, result } => {
                if generation != self.status_generation {
                    tracing::debug!(
                        generation,
                        current = self.status_generation,
                        "discarding stale queue-status response"
                    );
                    return;
                }
                self.queue_status.apply(result);
            }
            DataEvent::BarberQueue { result } => self.barber.set_queue(result),
            DataEvent::QueueUpdated { result } => {
                if let Err(message) = result {
                    self.barber.notice = Some(format!("Could not update the entry: {message}"));
                }
            }
            DataEvent::Profile { result } => match result {
                Ok(user) => {
                    if let Some(session) = &mut self.session
                        && session.user_id() == user.id
                    {
                        session.update_user(user.clone());
                    }
                    self.barber.apply_profile(user);
                }
                Err(message) => {
                    // A failed poll leaves the last-known-good flag alone
                    tracing::debug!(error = %message, "profile poll failed");
                    self.barber.toggling = false;
                }
            },
            DataEvent::ToggleFailed { message } => {
                self.barber.toggling = false;
                self.barber.notice = Some(message);
            }
            DataEvent::BarberStats { days, result } => {
                if days != self.barber.stats_days {
                    return;
                }
                self.barber.stats_loading = false;
                match result {
                    Ok(stats) => self.barber.stats = Some(stats),
                    Err(message) => {
                        self.barber.notice = Some(format!("Could not load stats: {message}"));
                    }
                }
            }
            DataEvent::AdminStats { revision, result } => self.admin.set_stats(revision, result),
            DataEvent::ServiceSaved { result } => match result {
                Ok(service) => {
                    self.admin.service_form.clear();
                    self.admin.mode = AdminMode::Normal;
                    self.admin.notice = Some(format!("Service \"{}\" saved", service.name));
                }
                // The form stays as typed so the admin can correct and resubmit
                Err(message) => self.admin.notice = Some(message),
            },
            DataEvent::ServiceDeleted { result } => match result {
                Ok(_) => self.admin.notice = Some("Service deleted".to_string()),
                Err(message) => self.admin.notice = Some(message),
            },
            DataEvent::UserSaved { result } => match result {
                Ok(user) => {
                    self.admin.staff_form.clear();
                    self.admin.mode = AdminMode::Normal;
                    self.admin.notice = Some(format!("Staff member \"{}\" saved", user.name));
                }
                Err(message) => self.admin.notice = Some(message),
            },
            DataEvent::UserDeleted { result } => match result {
                Ok(_) => self.admin.notice = Some("Staff member deleted".to_string()),
                Err(message) => self.admin.notice = Some(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fila_client::ClientConfig;
    use shared::models::{QueueItem, Role, Service, User};
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::UnboundedReceiver<crate::events::AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        // Nothing listens here; the flows under test never await a response
        let client = ClientConfig::new("http://127.0.0.1:1").build();
        (App::new(DataClient::new(client, tx)), rx)
    }

    fn queue_item(id: i64) -> QueueItem {
        QueueItem {
            id,
            client_name: "Ana".to_string(),
            client_phone: "11999990000".to_string(),
            status: QueueStatus::Waiting,
            barber_id: 2,
            service_id: 3,
            people_ahead: Some(1),
            service: None,
            barber: None,
        }
    }

    fn login_response(role: Role) -> LoginResponse {
        LoginResponse {
            access_token: "tok-123".to_string(),
            user: User {
                id: if role == Role::Admin { 1 } else { 2 },
                username: "user".to_string(),
                name: "User".to_string(),
                role,
                is_online: false,
            },
        }
    }

    #[tokio::test]
    async fn successful_join_navigates_to_the_status_screen() {
        let (mut app, _rx) = app();
        app.booking.submitting = true;

        app.apply_data(DataEvent::QueueJoined {
            result: Ok(queue_item(42)),
        });

        assert_eq!(app.screen, Screen::QueueStatus);
        assert_eq!(app.queue_status.entry_id, 42);
        assert!(!app.booking.submitting);
    }

    #[tokio::test]
    async fn failed_join_stays_on_the_wizard_with_a_notice() {
        let (mut app, _rx) = app();
        app.booking.submitting = true;

        app.apply_data(DataEvent::QueueJoined {
            result: Err("boom".to_string()),
        });

        assert_eq!(app.screen, Screen::Booking);
        assert!(app.booking.notice.is_some());
        assert!(!app.booking.submitting);
    }

    #[tokio::test]
    async fn stale_status_polls_are_discarded_after_remount() {
        let (mut app, _rx) = app();
        app.open_queue_status(42);
        let old_generation = app.queue_status.generation;
        app.open_queue_status(43);

        app.apply_data(DataEvent::QueueStatus {
            generation: old_generation,
            result: Ok(queue_item(42)),
        });
        assert!(app.queue_status.item.is_none());

        app.apply_data(DataEvent::QueueStatus {
            generation: app.queue_status.generation,
            result: Ok(queue_item(43)),
        });
        assert_eq!(app.queue_status.item.as_ref().unwrap().id, 43);
    }

    #[tokio::test]
    async fn login_routes_by_role() {
        let (mut app, _rx) = app();
        app.apply_data(DataEvent::LoggedIn {
            result: Ok(login_response(Role::Admin)),
        });
        assert_eq!(app.screen, Screen::Admin);
        assert!(app.session.as_ref().unwrap().is_admin());

        let (mut app, _rx) = self::app();
        app.apply_data(DataEvent::LoggedIn {
            result: Ok(login_response(Role::Barber)),
        });
        assert_eq!(app.screen, Screen::Barber);
    }

    #[tokio::test]
    async fn failed_login_keeps_the_screen_and_shows_the_error() {
        let (mut app, _rx) = app();
        app.screen = Screen::Login;
        app.login.submitting = true;

        app.apply_data(DataEvent::LoggedIn {
            result: Err("Invalid credentials. Try again.".to_string()),
        });

        assert_eq!(app.screen, Screen::Login);
        assert_eq!(
            app.login.error.as_deref(),
            Some("Invalid credentials. Try again.")
        );
    }

    #[tokio::test]
    async fn logout_tears_the_session_down() {
        let (mut app, _rx) = app();
        app.apply_data(DataEvent::LoggedIn {
            result: Ok(login_response(Role::Barber)),
        });
        assert!(app.queue_poller.is_some());
        assert!(app.profile_poller.is_some());

        app.logout();

        assert!(app.session.is_none());
        assert!(app.queue_poller.is_none());
        assert!(app.profile_poller.is_none());
        assert_eq!(app.screen, Screen::Booking);
    }

    #[tokio::test]
    async fn saved_service_clears_the_form_and_failed_save_keeps_it() {
        let (mut app, _rx) = app();
        app.admin.mode = AdminMode::Editing;
        app.admin
            .service_form
            .name
            .handle(tui_input::InputRequest::InsertChar('x'));

        app.apply_data(DataEvent::ServiceSaved {
            result: Ok(Service {
                id: 9,
                name: "x".to_string(),
                price: 10.0,
                avg_duration: 10,
                is_active: true,
            }),
        });
        assert_eq!(app.admin.service_form.name.value(), "");
        assert_eq!(app.admin.mode, AdminMode::Normal);

        app.admin.mode = AdminMode::Editing;
        app.admin
            .service_form
            .name
            .handle(tui_input::InputRequest::InsertChar('y'));
        app.apply_data(DataEvent::ServiceSaved {
            result: Err("Validation error: price".to_string()),
        });
        assert_eq!(app.admin.service_form.name.value(), "y");
        assert_eq!(app.admin.mode, AdminMode::Editing);
        assert!(app.admin.notice.is_some());
    }

    #[tokio::test]
    async fn online_flag_only_changes_via_the_profile_event() {
        let (mut app, _rx) = app();
        app.apply_data(DataEvent::LoggedIn {
            result: Ok(login_response(Role::Barber)),
        });
        let snapshot = app.session.as_ref().unwrap().user().clone();
        assert!(!app.barber.is_online(&snapshot));

        // Induced failure: no flicker to an unconfirmed state
        app.barber.toggling = true;
        app.apply_data(DataEvent::ToggleFailed {
            message: "Failed to update availability: timeout".to_string(),
        });
        assert!(!app.barber.is_online(&snapshot));
        assert!(!app.barber.toggling);

        // Confirmation arrives through the re-fetch
        let mut confirmed = snapshot.clone();
        confirmed.is_online = true;
        app.apply_data(DataEvent::Profile {
            result: Ok(confirmed),
        });
        assert!(app.barber.is_online(&snapshot));
        assert!(app.session.as_ref().unwrap().user().is_online);
    }
}
