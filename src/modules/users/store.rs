//! In-memory identity store.
//!
//! Stands in for a real user repository behind the narrow interface the
//! authentication core needs: insert, find, and identity lookup. The lock is
//! the only shared mutable state in the process; token validation itself
//! never touches it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::modules::users::model::{Identity, User};
use tollgate_core::AppError;

#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new user, keyed by username.
    ///
    /// Fails with a bad-request error when the username is already taken.
    pub async fn insert(&self, user: User) -> Result<(), AppError> {
        let mut users = self.inner.write().await;
        if users.contains_key(&user.username) {
            warn!(username = %user.username, "user already exists");
            return Err(AppError::bad_request("User already exists"));
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }

    pub async fn find(&self, username: &str) -> Option<User> {
        self.inner.read().await.get(username).cloned()
    }

    /// Resolves a token subject to its identity.
    ///
    /// An unknown subject is an authentication failure for the request, not a
    /// condition the filter recovers from.
    pub async fn load_identity(&self, subject: &str) -> Result<Identity, AppError> {
        match self.find(subject).await {
            Some(user) => Ok(user.identity()),
            None => {
                warn!(subject, "identity lookup failed");
                Err(AppError::unauthorized(format!(
                    "User not found: {}",
                    subject
                )))
            }
        }
    }

    /// Removes a user, returning whether one was present.
    pub async fn remove(&self, username: &str) -> bool {
        self.inner.write().await.remove(username).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::model::Role;
    use uuid::Uuid;

    fn test_user(username: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password: "hash".to_string(),
            roles: vec![Role::User],
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = UserStore::new();
        store.insert(test_user("alice")).await.unwrap();

        let found = store.find("alice").await.unwrap();
        assert_eq!(found.username, "alice");
        assert!(store.find("bob").await.is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_rejected() {
        let store = UserStore::new();
        store.insert(test_user("alice")).await.unwrap();

        let err = store.insert(test_user("alice")).await.unwrap_err();
        assert_eq!(err, AppError::bad_request("User already exists"));
    }

    #[tokio::test]
    async fn test_load_identity_known_subject() {
        let store = UserStore::new();
        store.insert(test_user("alice")).await.unwrap();

        let identity = store.load_identity("alice").await.unwrap();
        assert_eq!(identity.subject, "alice");
        assert_eq!(identity.roles, vec!["ROLE_USER"]);
    }

    #[tokio::test]
    async fn test_load_identity_unknown_subject() {
        let store = UserStore::new();
        let err = store.load_identity("ghost").await.unwrap_err();
        assert_eq!(err, AppError::unauthorized("User not found: ghost"));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = UserStore::new();
        store.insert(test_user("alice")).await.unwrap();
        assert!(store.remove("alice").await);
        assert!(!store.remove("alice").await);
    }
}
