//! Admin dashboard
//!
//! Three tabs: revenue overview with date/service filters, service
//! management, and staff management. Mutations follow mutate-then-
//! invalidate: a success clears the form and re-fetches exactly the list it
//! touched, a failure leaves the form untouched for correction.

use fila_client::AdminDashboardQuery;
use shared::models::{
    AdminDashboard, Role, Service, ServiceCreate, ServiceUpdate, User, UserCreate, UserUpdate,
};
use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Overview,
    Services,
    Staff,
}

/// Normal browses lists; Editing routes keystrokes into the active form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminMode {
    #[default]
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Start,
    End,
}

/// Creation/edit form for services
#[derive(Debug, Default)]
pub struct ServiceForm {
    pub name: Input,
    pub price: Input,
    pub duration: Input,
    /// Id of the service being edited; None while creating
    pub editing: Option<i64>,
    pub focus: usize,
}

impl ServiceForm {
    pub const FIELDS: usize = 3;

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Populate from an existing service for editing
    pub fn load(&mut self, service: &Service) {
        self.name = Input::new(service.name.clone());
        self.price = Input::new(format!("{:.2}", service.price));
        self.duration = Input::new(service.avg_duration.to_string());
        self.editing = Some(service.id);
        self.focus = 0;
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn focused_input(&mut self) -> &mut Input {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.price,
            _ => &mut self.duration,
        }
    }

    /// Payload for POST /services
    pub fn create_payload(&self) -> Result<ServiceCreate, String> {
        let name = self.name.value().trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        Ok(ServiceCreate {
            name: name.to_string(),
            price: parse_price(self.price.value())?,
            avg_duration: parse_duration(self.duration.value())?,
        })
    }

    /// Payload for PATCH /services/{id}; blank fields are not sent
    pub fn update_payload(&self) -> Result<(i64, ServiceUpdate), String> {
        let id = self.editing.ok_or("Nothing selected for editing")?;
        let mut update = ServiceUpdate::default();

        let name = self.name.value().trim();
        if !name.is_empty() {
            update.name = Some(name.to_string());
        }
        if !self.price.value().trim().is_empty() {
            update.price = Some(parse_price(self.price.value())?);
        }
        if !self.duration.value().trim().is_empty() {
            update.avg_duration = Some(parse_duration(self.duration.value())?);
        }

        Ok((id, update))
    }
}

/// Creation/edit form for staff members
#[derive(Debug)]
pub struct StaffForm {
    pub name: Input,
    pub username: Input,
    pub password: Input,
    pub role: Role,
    pub editing: Option<i64>,
    pub focus: usize,
}

impl Default for StaffForm {
    fn default() -> Self {
        Self {
            name: Input::default(),
            username: Input::default(),
            password: Input::default(),
            role: Role::Barber,
            editing: None,
            focus: 0,
        }
    }
}

impl StaffForm {
    /// name, username, password, role
    pub const FIELDS: usize = 4;
    pub const ROLE_FIELD: usize = 3;

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Populate from an existing user for editing; the password stays blank
    /// (it cannot be read back and is not part of the update payload)
    pub fn load(&mut self, user: &User) {
        self.name = Input::new(user.name.clone());
        self.username = Input::new(user.username.clone());
        self.password = Input::default();
        self.role = user.role;
        self.editing = Some(user.id);
        self.focus = 0;
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            0 => Some(&mut self.name),
            1 => Some(&mut self.username),
            2 => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            Role::Barber => Role::Admin,
            Role::Admin => Role::Barber,
        };
    }

    /// Payload for POST /users
    pub fn create_payload(&self) -> Result<UserCreate, String> {
        let name = self.name.value().trim();
        let username = self.username.value().trim();
        let password = self.password.value();
        if name.is_empty() || username.is_empty() {
            return Err("Name and username are required".to_string());
        }
        if password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(UserCreate {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role: self.role,
        })
    }

    /// Payload for PATCH /users/{id}
    pub fn update_payload(&self) -> Result<(i64, UserUpdate), String> {
        let id = self.editing.ok_or("Nothing selected for editing")?;
        let mut update = UserUpdate {
            role: Some(self.role),
            ..Default::default()
        };

        let name = self.name.value().trim();
        if !name.is_empty() {
            update.name = Some(name.to_string());
        }
        let username = self.username.value().trim();
        if !username.is_empty() {
            update.username = Some(username.to_string());
        }

        Ok((id, update))
    }
}

fn parse_price(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| "Price must be a number".to_string())
}

fn parse_duration(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| "Duration must be whole minutes".to_string())
}

/// State for the admin dashboard
#[derive(Debug)]
pub struct AdminView {
    pub tab: AdminTab,
    pub mode: AdminMode,

    // Overview filters; committed changes bump the revision so a response
    // for an older combination can never land on a newer one
    pub start: Input,
    pub end: Input,
    pub filter_focus: FilterField,
    pub service_filter: Option<i64>,
    pub filter_revision: u64,
    pub stats: Option<AdminDashboard>,
    pub stats_loading: bool,
    pub stats_error: Option<String>,

    pub services: Vec<Service>,
    pub services_loaded: bool,
    pub service_cursor: usize,
    pub service_form: ServiceForm,

    pub users: Vec<User>,
    pub users_loaded: bool,
    pub user_cursor: usize,
    pub staff_form: StaffForm,

    pub notice: Option<String>,
}

impl Default for AdminView {
    fn default() -> Self {
        Self {
            tab: AdminTab::Overview,
            mode: AdminMode::Normal,
            start: Input::default(),
            end: Input::default(),
            filter_focus: FilterField::Start,
            service_filter: None,
            filter_revision: 0,
            stats: None,
            stats_loading: false,
            stats_error: None,
            services: Vec::new(),
            services_loaded: false,
            service_cursor: 0,
            service_form: ServiceForm::default(),
            users: Vec::new(),
            users_loaded: false,
            user_cursor: 0,
            staff_form: StaffForm::default(),
            notice: None,
        }
    }
}

impl AdminView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current filter combination; blank inputs are absent, not empty
    pub fn filters(&self) -> AdminDashboardQuery {
        AdminDashboardQuery {
            start_date: non_blank(self.start.value()),
            end_date: non_blank(self.end.value()),
            service_id: self.service_filter,
        }
    }

    /// Commit a filter change; the returned revision travels with the fetch
    pub fn bump_filters(&mut self) -> u64 {
        self.filter_revision += 1;
        self.stats_loading = true;
        self.filter_revision
    }

    /// Walk the service filter through None and every loaded service
    pub fn cycle_service_filter(&mut self, delta: i64) {
        let mut options: Vec<Option<i64>> = vec![None];
        options.extend(self.services.iter().map(|s| Some(s.id)));

        let current = options
            .iter()
            .position(|o| *o == self.service_filter)
            .unwrap_or(0);
        let next = (current as i64 + delta).rem_euclid(options.len() as i64) as usize;
        self.service_filter = options[next];
    }

    pub fn switch_filter_focus(&mut self) {
        self.filter_focus = match self.filter_focus {
            FilterField::Start => FilterField::End,
            FilterField::End => FilterField::Start,
        };
    }

    /// Apply a stats response for the given revision; stale combinations
    /// are dropped
    pub fn set_stats(&mut self, revision: u64, result: Result<AdminDashboard, String>) {
        if revision != self.filter_revision {
            return;
        }
        self.stats_loading = false;
        match result {
            Ok(stats) => {
                self.stats = Some(stats);
                self.stats_error = None;
            }
            Err(message) => {
                self.stats_error = Some(message);
            }
        }
    }

    pub fn set_services(&mut self, result: Result<Vec<Service>, String>) {
        self.services_loaded = true;
        if let Ok(services) = result {
            self.services = services;
            self.service_cursor = self.service_cursor.min(self.services.len().saturating_sub(1));
        }
    }

    pub fn set_users(&mut self, result: Result<Vec<User>, String>) {
        self.users_loaded = true;
        if let Ok(users) = result {
            self.users = users;
            self.user_cursor = self.user_cursor.min(self.users.len().saturating_sub(1));
        }
    }

    pub fn move_cursor(&mut self, delta: i64) {
        let (cursor, len) = match self.tab {
            AdminTab::Services => (&mut self.service_cursor, self.services.len()),
            AdminTab::Staff => (&mut self.user_cursor, self.users.len()),
            AdminTab::Overview => return,
        };
        if len == 0 {
            return;
        }
        *cursor = (*cursor as i64 + delta).rem_euclid(len as i64) as usize;
    }

    pub fn selected_service(&self) -> Option<&Service> {
        self.services.get(self.service_cursor)
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.user_cursor)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
