//! Session Persistence
//!
//! Bearer token and role kept in browser localStorage.

use crate::config::{TOKEN_KEY, USER_TYPE_KEY};
use crate::models::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub role: Role,
}

impl Session {
    /// Build from the two stored strings; both must be present and the role known
    pub fn from_parts(token: Option<String>, user_type: Option<String>) -> Option<Self> {
        let access_token = token.filter(|t| !t.trim().is_empty())?;
        let role = user_type.as_deref().and_then(Role::parse)?;
        Some(Self { access_token, role })
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored session, if any
pub fn load() -> Option<Session> {
    let store = storage()?;
    Session::from_parts(
        store.get_item(TOKEN_KEY).ok().flatten(),
        store.get_item(USER_TYPE_KEY).ok().flatten(),
    )
}

pub fn save(session: &Session) {
    let Some(store) = storage() else {
        web_sys::console::warn_1(&"[Session] localStorage unavailable, session not persisted".into());
        return;
    };
    let _ = store.set_item(TOKEN_KEY, &session.access_token);
    let _ = store.set_item(USER_TYPE_KEY, session.role.as_str());
}

pub fn clear() {
    if let Some(store) = storage() {
        let _ = store.remove_item(TOKEN_KEY);
        let _ = store.remove_item(USER_TYPE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_both() {
        assert!(Session::from_parts(Some("abc".into()), None).is_none());
        assert!(Session::from_parts(None, Some("teacher".into())).is_none());
        assert!(Session::from_parts(Some("  ".into()), Some("teacher".into())).is_none());
        assert!(Session::from_parts(Some("abc".into()), Some("visitor".into())).is_none());
    }

    #[test]
    fn test_from_parts_and_bearer() {
        let session = Session::from_parts(Some("tok123".into()), Some("finance".into())).unwrap();
        assert_eq!(session.role, Role::Accounting);
        assert_eq!(session.bearer(), "Bearer tok123");
    }
}
