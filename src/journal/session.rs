//! Mock sign-in session state.
//!
//! Sign-in is simulated: every login yields the fixed demo profile under a
//! fresh bearer token. Tokens stay valid until logout or process exit.

use dashmap::DashMap;

use crate::journal::core::ids::SessionToken;
use crate::journal::core::user::User;

/// Token-to-user session map.
#[derive(Default)]
pub struct SessionManager {
    sessions: DashMap<SessionToken, User>,
}

impl SessionManager {
    /// Create an empty session manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated sign-in: mint a token for the demo user.
    pub fn login(&self) -> (SessionToken, User) {
        let token = SessionToken::new();
        let user = User::demo();
        self.sessions.insert(token, user.clone());
        (token, user)
    }

    /// Sign out the given token. Unknown tokens are a no-op.
    pub fn logout(&self, token: &SessionToken) {
        self.sessions.remove(token);
    }

    /// Resolve a token to its signed-in user, if any.
    #[must_use]
    pub fn user_for(&self, token: &SessionToken) -> Option<User> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    /// Number of active sessions.
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_lookup() {
        let sessions = SessionManager::new();
        let (token, user) = sessions.login();

        assert_eq!(sessions.user_for(&token), Some(user));
        assert_eq!(sessions.active_sessions(), 1);
    }

    #[test]
    fn test_logout_invalidates_token() {
        let sessions = SessionManager::new();
        let (token, _user) = sessions.login();

        sessions.logout(&token);
        assert!(sessions.user_for(&token).is_none());
        assert_eq!(sessions.active_sessions(), 0);
    }

    #[test]
    fn test_logout_unknown_token_is_a_no_op() {
        let sessions = SessionManager::new();
        sessions.logout(&SessionToken::new());
        assert_eq!(sessions.active_sessions(), 0);
    }

    #[test]
    fn test_unknown_token_resolves_to_none() {
        let sessions = SessionManager::new();
        assert!(sessions.user_for(&SessionToken::new()).is_none());
    }
}
