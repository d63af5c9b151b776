//! API layer for the Fila TUI
//!
//! Owns the HTTP client, the query cache, and the pollers. Every call runs
//! in the background and reports back through the event channel; writes
//! invalidate exactly the cache keys they affect and trigger the dependent
//! re-fetch.

use std::sync::Arc;
use std::time::Duration;

use fila_client::{
    AdminDashboardQuery, ClientError, HttpClient, Poller, QueryCache, keys,
};
use shared::models::{
    QueueJoin, QueueStatus, Service, ServiceCreate, ServiceUpdate, User, UserCreate, UserUpdate,
};
use tokio::sync::mpsc;

use crate::events::{AppEvent, DataEvent};

/// Queue-status screen refresh interval
pub const QUEUE_STATUS_INTERVAL: Duration = Duration::from_secs(5);
/// Barber queue refresh interval
pub const BARBER_QUEUE_INTERVAL: Duration = Duration::from_secs(10);
/// Barber profile refresh interval
pub const PROFILE_INTERVAL: Duration = Duration::from_secs(15);

/// Background API access for the event loop
#[derive(Clone)]
pub struct DataClient {
    client: HttpClient,
    cache: Arc<QueryCache>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl DataClient {
    pub fn new(client: HttpClient, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            client,
            cache: Arc::new(QueryCache::new()),
            tx,
        }
    }

    /// Copy of this client carrying the session token
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            client: self.client.clone().with_token(token),
            cache: self.cache.clone(),
            tx: self.tx.clone(),
        }
    }

    /// Copy of this client with the token dropped (logout)
    pub fn without_token(&self) -> Self {
        Self {
            client: self.client.clone().without_token(),
            cache: self.cache.clone(),
            tx: self.tx.clone(),
        }
    }

    fn send(&self, event: DataEvent) {
        let _ = self.tx.send(AppEvent::Data(event));
    }

    // ========== Reads ==========

    /// Load the service list, serving a fresh cached copy when one exists
    pub fn load_services(&self, force: bool) {
        if force {
            self.cache.invalidate(keys::SERVICES);
        } else if let Some(services) = self.cache.get::<Vec<Service>>(keys::SERVICES) {
            self.send(DataEvent::Services { result: Ok(services) });
            return;
        }

        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.list_services().await;
            if let Ok(services) = &result {
                this.cache.put(keys::SERVICES, services);
            }
            this.send(DataEvent::Services {
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    /// Load the barber list for the booking wizard
    pub fn load_barbers(&self, force: bool) {
        if force {
            self.cache.invalidate(keys::BARBERS);
        } else if let Some(barbers) = self.cache.get::<Vec<User>>(keys::BARBERS) {
            self.send(DataEvent::Barbers { result: Ok(barbers) });
            return;
        }

        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.list_barbers().await;
            if let Ok(barbers) = &result {
                this.cache.put(keys::BARBERS, barbers);
            }
            this.send(DataEvent::Barbers {
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    /// Load the staff list for the admin screen
    pub fn load_users(&self, force: bool) {
        if force {
            self.cache.invalidate(keys::USERS);
        } else if let Some(users) = self.cache.get::<Vec<User>>(keys::USERS) {
            self.send(DataEvent::Users { result: Ok(users) });
            return;
        }

        let this = self.clone();
        tokio::spawn(async move {
            this.refetch_users().await;
        });
    }

    /// Aggregate stats for the admin overview; `revision` ties the response
    /// to the filter combination that requested it
    pub fn load_admin_stats(&self, query: AdminDashboardQuery, revision: u64, force: bool) {
        let key = query.cache_key();

        if force {
            self.cache.invalidate_prefix(keys::DASHBOARD_ADMIN_PREFIX);
        } else if let Some(stats) = self.cache.get(&key) {
            self.send(DataEvent::AdminStats {
                revision,
                result: Ok(stats),
            });
            return;
        }

        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.admin_dashboard(&query).await;
            if let Ok(stats) = &result {
                this.cache.put(key, stats);
            }
            this.send(DataEvent::AdminStats {
                revision,
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    /// Per-barber stats for the results tab
    pub fn load_barber_stats(&self, days: u32, force: bool) {
        let key = keys::barber_dashboard(Some(days));

        if force {
            self.cache.invalidate(&key);
        } else if let Some(stats) = self.cache.get(&key) {
            self.send(DataEvent::BarberStats {
                days,
                result: Ok(stats),
            });
            return;
        }

        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.barber_dashboard(Some(days)).await;
            if let Ok(stats) = &result {
                this.cache.put(key, stats);
            }
            this.send(DataEvent::BarberStats {
                days,
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    // ========== Pollers ==========

    /// Poll one queue entry's status every five seconds for the lifetime of
    /// the status screen
    pub fn start_queue_status_poller(&self, entry_id: i64, generation: u64) -> Poller {
        let this = self.clone();
        Poller::spawn(QUEUE_STATUS_INTERVAL, move || {
            let this = this.clone();
            async move {
                let result = this.client.queue_status(entry_id).await;
                if let Ok(item) = &result {
                    this.cache.put(keys::queue_entry(entry_id), item);
                }
                this.send(DataEvent::QueueStatus {
                    generation,
                    result: result.map_err(|e| e.to_string()),
                });
            }
        })
    }

    /// Poll the barber's own queue
    pub fn start_barber_queue_poller(&self) -> Poller {
        let this = self.clone();
        Poller::spawn(BARBER_QUEUE_INTERVAL, move || {
            let this = this.clone();
            async move {
                this.fetch_barber_queue().await;
            }
        })
    }

    /// Poll the barber's profile so a toggle from another session shows up
    pub fn start_profile_poller(&self, user_id: i64) -> Poller {
        let this = self.clone();
        Poller::spawn(PROFILE_INTERVAL, move || {
            let this = this.clone();
            async move {
                this.fetch_profile(user_id).await;
            }
        })
    }

    async fn fetch_barber_queue(&self) {
        let result = self.client.barber_queue().await;
        if let Ok(queue) = &result {
            self.cache.put(keys::BARBER_QUEUE, queue);
        }
        self.send(DataEvent::BarberQueue {
            result: result.map_err(|e| e.to_string()),
        });
    }

    async fn fetch_profile(&self, user_id: i64) {
        let result = self.client.get_user(user_id).await;
        if let Ok(user) = &result {
            self.cache.put(keys::profile(user_id), user);
        }
        self.send(DataEvent::Profile {
            result: result.map_err(|e| e.to_string()),
        });
    }

    // ========== Writes ==========

    /// POST /auth/login
    pub fn login(&self, username: String, password: String) {
        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.login(&username, &password).await;
            this.send(DataEvent::LoggedIn {
                result: result.map_err(login_failure),
            });
        });
    }

    /// Join the queue from the booking wizard
    pub fn join_queue(&self, payload: QueueJoin) {
        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.join_queue(&payload).await;
            this.send(DataEvent::QueueJoined {
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    /// Request a queue status transition, then re-fetch the barber queue
    pub fn update_queue_status(&self, entry_id: i64, status: QueueStatus) {
        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.update_queue_status(entry_id, status).await;
            let ok = result.is_ok();
            this.send(DataEvent::QueueUpdated {
                result: result.map_err(|e| e.to_string()),
            });
            if ok {
                this.cache.invalidate(keys::BARBER_QUEUE);
                this.fetch_barber_queue().await;
            }
        });
    }

    /// Flip the availability flag; the displayed value only changes via the
    /// confirming profile re-fetch
    pub fn toggle_online(&self, user_id: i64) {
        let this = self.clone();
        tokio::spawn(async move {
            match this.client.toggle_online().await {
                Ok(_) => {
                    this.cache.invalidate(&keys::profile(user_id));
                    this.fetch_profile(user_id).await;
                }
                Err(err) => {
                    this.send(DataEvent::ToggleFailed {
                        message: format!("Failed to update availability: {err}"),
                    });
                }
            }
        });
    }

    /// Create a service, then re-fetch the service list
    pub fn create_service(&self, payload: ServiceCreate) {
        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.create_service(&payload).await;
            this.finish_service_write(result).await;
        });
    }

    /// Update a service, then re-fetch the service list
    pub fn update_service(&self, id: i64, payload: ServiceUpdate) {
        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.update_service(id, &payload).await;
            this.finish_service_write(result).await;
        });
    }

    /// Delete a service; a dependency conflict gets its own message
    pub fn delete_service(&self, id: i64) {
        let this = self.clone();
        tokio::spawn(async move {
            match this.client.delete_service(id).await {
                Ok(()) => {
                    this.send(DataEvent::ServiceDeleted { result: Ok(id) });
                    this.cache.invalidate(keys::SERVICES);
                    this.refetch_services().await;
                }
                Err(err) => {
                    this.send(DataEvent::ServiceDeleted {
                        result: Err(delete_failure("Service", &err)),
                    });
                }
            }
        });
    }

    async fn finish_service_write(&self, result: Result<Service, ClientError>) {
        match result {
            Ok(service) => {
                self.send(DataEvent::ServiceSaved { result: Ok(service) });
                self.cache.invalidate(keys::SERVICES);
                self.refetch_services().await;
            }
            Err(err) => {
                self.send(DataEvent::ServiceSaved {
                    result: Err(err.to_string()),
                });
            }
        }
    }

    async fn refetch_services(&self) {
        let result = self.client.list_services().await;
        if let Ok(services) = &result {
            self.cache.put(keys::SERVICES, services);
        }
        self.send(DataEvent::Services {
            result: result.map_err(|e| e.to_string()),
        });
    }

    /// Create a staff member, then re-fetch the staff list
    pub fn create_user(&self, payload: UserCreate) {
        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.create_user(&payload).await;
            this.finish_user_write(result).await;
        });
    }

    /// Update a staff member, then re-fetch the staff list
    pub fn update_user(&self, id: i64, payload: UserUpdate) {
        let this = self.clone();
        tokio::spawn(async move {
            let result = this.client.update_user(id, &payload).await;
            this.finish_user_write(result).await;
        });
    }

    /// Delete a staff member
    pub fn delete_user(&self, id: i64) {
        let this = self.clone();
        tokio::spawn(async move {
            match this.client.delete_user(id).await {
                Ok(()) => {
                    this.send(DataEvent::UserDeleted { result: Ok(id) });
                    this.invalidate_staff();
                    this.refetch_users().await;
                }
                Err(err) => {
                    this.send(DataEvent::UserDeleted {
                        result: Err(delete_failure("Staff member", &err)),
                    });
                }
            }
        });
    }

    async fn finish_user_write(&self, result: Result<User, ClientError>) {
        match result {
            Ok(user) => {
                self.send(DataEvent::UserSaved { result: Ok(user) });
                self.invalidate_staff();
                self.refetch_users().await;
            }
            Err(err) => {
                self.send(DataEvent::UserSaved {
                    result: Err(err.to_string()),
                });
            }
        }
    }

    // The barber list is a role-filtered view of the staff list, so a staff
    // write affects both keys
    fn invalidate_staff(&self) {
        self.cache.invalidate(keys::USERS);
        self.cache.invalidate(keys::BARBERS);
    }

    async fn refetch_users(&self) {
        let result = self.client.list_users().await;
        if let Ok(users) = &result {
            self.cache.put(keys::USERS, users);
        }
        self.send(DataEvent::Users {
            result: result.map_err(|e| e.to_string()),
        });
    }
}

/// Message for a failed delete; a dependency conflict must read differently
/// from a generic failure
fn delete_failure(resource: &str, err: &ClientError) -> String {
    if err.is_conflict() {
        format!("{resource} is referenced by queue history and cannot be deleted")
    } else {
        format!("Failed to delete: {err}")
    }
}

fn login_failure(err: ClientError) -> String {
    match err {
        ClientError::Unauthorized => "Invalid credentials. Try again.".to_string(),
        other => format!("Login failed: {other}"),
    }
}
