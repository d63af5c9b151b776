//! Queue API

use shared::models::{QueueItem, QueueJoin, QueueStatus, QueueStatusUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Current barber's queue entries
    pub async fn barber_queue(&self) -> ClientResult<Vec<QueueItem>> {
        self.get("/queue/barber").await
    }

    /// Join the queue; the response carries the server-assigned entry id
    pub async fn join_queue(&self, payload: &QueueJoin) -> ClientResult<QueueItem> {
        self.post("/queue", payload).await
    }

    /// Poll a single entry's status and peopleAhead count
    pub async fn queue_status(&self, id: i64) -> ClientResult<QueueItem> {
        self.get(&format!("/queue/status/{id}")).await
    }

    /// Request a status transition; the server is authoritative and may
    /// reject it
    pub async fn update_queue_status(
        &self,
        id: i64,
        status: QueueStatus,
    ) -> ClientResult<QueueItem> {
        self.patch(&format!("/queue/{id}"), &QueueStatusUpdate { status })
            .await
    }
}
