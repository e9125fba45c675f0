// src/session/mod.rs
// Server-held login sessions keyed by an opaque cookie token

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "lumen_session";

/// One client's login state. The connection fields are recorded verbatim
/// from the login request and never verified against the remote host.
#[derive(Debug, Clone)]
pub struct Session {
    pub logged_in: bool,
    pub ip: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// In-process session store, injected into handlers through `AppState`.
/// Sessions live until the process exits; there is no logout or expiry.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session and return its opaque token.
    pub async fn create(&self, session: Session) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Whether the token maps to an authenticated session.
    pub async fn is_logged_in(&self, token: &str) -> bool {
        self.sessions
            .read()
            .await
            .get(token)
            .is_some_and(|s| s.logged_in)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Extract the session token from a `Cookie` header value.
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    header.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// `Set-Cookie` value for a freshly created session.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            logged_in: true,
            ip: "10.0.0.7".to_string(),
            port: "22".to_string(),
            username: "pi".to_string(),
            password: "raspberry".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let store = SessionStore::new();
        assert!(store.is_empty().await);

        let token = store.create(sample_session()).await;
        assert_eq!(store.len().await, 1);

        let session = store.get(&token).await.unwrap();
        assert!(session.logged_in);
        assert_eq!(session.username, "pi");
        assert_eq!(session.password, "raspberry");

        assert!(store.is_logged_in(&token).await);
        assert!(!store.is_logged_in("bogus-token").await);
    }

    #[test]
    fn test_cookie_round_trip() {
        let cookie = session_cookie("abc-123");
        assert_eq!(cookie, "lumen_session=abc-123; Path=/; HttpOnly");

        let token = token_from_cookie_header("lumen_session=abc-123").unwrap();
        assert_eq!(token, "abc-123");
    }

    #[test]
    fn test_cookie_header_with_multiple_cookies() {
        let header = "theme=dark; lumen_session=tok-9; lang=en";
        assert_eq!(token_from_cookie_header(header).as_deref(), Some("tok-9"));
        assert_eq!(token_from_cookie_header("theme=dark; lang=en"), None);
    }
}
