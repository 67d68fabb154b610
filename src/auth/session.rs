use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
}

/// Session collaborator. Login and token handling live elsewhere.
pub trait AuthSession: Send + Sync {
    fn is_authenticated(&self) -> bool;
    fn current_user(&self) -> Option<SessionUser>;
    fn logout(&self);
}

#[derive(Debug, Default)]
pub struct MockAuthSession {
    user: RwLock<Option<SessionUser>>,
}

impl MockAuthSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(username: &str) -> Self {
        Self {
            user: RwLock::new(Some(SessionUser {
                username: username.to_string(),
            })),
        }
    }
}

impl AuthSession for MockAuthSession {
    fn is_authenticated(&self) -> bool {
        self.user.read().map(|u| u.is_some()).unwrap_or(false)
    }

    fn current_user(&self) -> Option<SessionUser> {
        self.user.read().ok().and_then(|u| u.clone())
    }

    fn logout(&self) {
        if let Ok(mut user) = self.user.write() {
            tracing::debug!("session closed for {:?}", user.as_ref().map(|u| &u.username));
            *user = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_clears_user() {
        let session = MockAuthSession::signed_in("alex");
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().username, "alex");

        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }
}
