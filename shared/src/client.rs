//! Client-related types shared between the API and its consumers
//!
//! Auth request/response DTOs. The API keeps `access_token` in snake_case;
//! everything else on the wire is camelCase.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}
