//! Service API

use shared::models::{Service, ServiceCreate, ServiceUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List all services
    pub async fn list_services(&self) -> ClientResult<Vec<Service>> {
        self.get("/services").await
    }

    /// Create a service
    pub async fn create_service(&self, payload: &ServiceCreate) -> ClientResult<Service> {
        self.post("/services", payload).await
    }

    /// Update a subset of a service's fields
    pub async fn update_service(&self, id: i64, payload: &ServiceUpdate) -> ClientResult<Service> {
        self.patch(&format!("/services/{id}"), payload).await
    }

    /// Delete a service; fails with a conflict when queue history still
    /// references it
    pub async fn delete_service(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/services/{id}")).await
    }
}
