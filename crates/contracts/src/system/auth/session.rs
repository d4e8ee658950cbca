use serde::{Deserialize, Serialize};

use crate::shared::storage::KeyValueStorage;

/// Opaque bearer credential plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub token: String,
    pub username: String,
}

/// Owner of the persisted identity
///
/// Token and username live under separate keys; an identity exists only while
/// a non-empty token is stored.
#[derive(Clone)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    token_key: String,
    username_key: String,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S, token_key: impl Into<String>, username_key: impl Into<String>) -> Self {
        Self {
            storage,
            token_key: token_key.into(),
            username_key: username_key.into(),
        }
    }

    /// Identity persisted by a previous login, if any
    pub fn load(&self) -> Option<Identity> {
        let token = self.token()?;
        Some(Identity {
            token,
            username: self.username().unwrap_or_default(),
        })
    }

    pub fn save(&self, identity: &Identity) {
        self.storage.set_item(&self.token_key, &identity.token);
        self.storage.set_item(&self.username_key, &identity.username);
    }

    /// Forget the identity (logout or failed verification)
    pub fn clear(&self) {
        self.storage.remove_item(&self.token_key);
        self.storage.remove_item(&self.username_key);
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(&self.token_key)
            .filter(|t| !t.is_empty())
    }

    pub fn username(&self) -> Option<String> {
        self.storage.get_item(&self.username_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_save_load_clear() {
        let storage = MemoryStorage::new();
        let session = SessionStore::new(&storage, "jwt_token", "username");
        assert_eq!(session.load(), None);

        let identity = Identity {
            token: "tok".into(),
            username: "lan".into(),
        };
        session.save(&identity);
        assert_eq!(storage.get_item("jwt_token").as_deref(), Some("tok"));
        assert_eq!(session.load(), Some(identity));

        session.clear();
        assert_eq!(session.load(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_empty_token_is_no_identity() {
        let storage = MemoryStorage::new();
        storage.set_item("jwt_token", "");
        storage.set_item("username", "lan");
        let session = SessionStore::new(&storage, "jwt_token", "username");
        assert_eq!(session.load(), None);
    }
}
