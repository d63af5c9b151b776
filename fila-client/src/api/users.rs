//! User API

use shared::models::{User, UserCreate, UserUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List all staff members
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get("/users").await
    }

    /// List barber-role users only
    pub async fn list_barbers(&self) -> ClientResult<Vec<User>> {
        self.get("/users/barbers").await
    }

    /// Fetch a single user (live profile polling)
    pub async fn get_user(&self, id: i64) -> ClientResult<User> {
        self.get(&format!("/users/{id}")).await
    }

    /// Create a staff member
    pub async fn create_user(&self, payload: &UserCreate) -> ClientResult<User> {
        self.post("/users", payload).await
    }

    /// Update a subset of a user's fields
    pub async fn update_user(&self, id: i64, payload: &UserUpdate) -> ClientResult<User> {
        self.patch(&format!("/users/{id}"), payload).await
    }

    /// Flip the current user's availability flag; returns the new profile
    pub async fn toggle_online(&self) -> ClientResult<User> {
        self.patch_empty("/users/profile/toggle-online").await
    }

    /// Delete a staff member
    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/users/{id}")).await
    }
}
