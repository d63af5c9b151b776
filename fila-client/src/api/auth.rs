//! Auth API

use shared::client::{LoginRequest, LoginResponse};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        self.post("/auth/login", &request).await
    }
}
