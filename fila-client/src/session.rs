//! Auth session
//!
//! Explicitly scoped session state: created from a login response, carried
//! through the view tree, dropped on logout. Never a process-wide global.

use shared::client::LoginResponse;
use shared::models::{Role, User};

/// An authenticated session: the bearer token and the user it belongs to
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    /// Build a session from a successful login response
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            token: response.access_token,
            user: response.user,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    /// Replace the user snapshot after a profile re-fetch; the snapshot only
    /// ever changes from server responses, never from local guesses
    pub fn update_user(&mut self, user: User) {
        self.user = user;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_response(role: Role) -> LoginResponse {
        LoginResponse {
            access_token: "jwt-token".to_string(),
            user: User {
                id: 2,
                username: "joao".to_string(),
                name: "João".to_string(),
                role,
                is_online: false,
            },
        }
    }

    #[test]
    fn session_wraps_login_response() {
        let session = Session::from_login(login_response(Role::Barber));
        assert_eq!(session.token(), "jwt-token");
        assert_eq!(session.user_id(), 2);
        assert!(!session.is_admin());
    }

    #[test]
    fn profile_refetch_replaces_snapshot() {
        let mut session = Session::from_login(login_response(Role::Barber));
        assert!(!session.user().is_online);

        let mut confirmed = session.user().clone();
        confirmed.is_online = true;
        session.update_user(confirmed);

        assert!(session.user().is_online);
    }
}
