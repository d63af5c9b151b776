//! Queue Model

use serde::{Deserialize, Serialize};

use super::{Service, User};

/// Queue entry status as reported by the server
///
/// WAITING → IN_PROGRESS → DONE, with CANCELLED reachable from the two
/// non-terminal states. The server owns every transition; the client only
/// renders the value it last fetched and may request a transition the
/// server is free to reject.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    Waiting,
    InProgress,
    Done,
    Cancelled,
}

/// A customer's place in line for a specific barber and service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub id: i64,
    pub client_name: String,
    pub client_phone: String,
    pub status: QueueStatus,
    pub barber_id: i64,
    pub service_id: i64,
    /// WAITING entries ahead of this one for the same barber
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_ahead: Option<i64>,
    // Embedded relations; the API capitalizes these keys
    #[serde(rename = "Service", skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
    #[serde(rename = "Barber", skip_serializing_if = "Option::is_none")]
    pub barber: Option<User>,
}

/// Join queue payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueueJoin {
    pub client_name: String,
    pub client_phone: String,
    pub barber_id: i64,
    pub service_id: i64,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStatusUpdate {
    pub status: QueueStatus,
}
