use contracts::system::auth::{Identity, SessionStore};

use crate::shared::browser_storage::BrowserStorage;
use crate::shared::config::config;

/// Session store over `localStorage`, keyed per the client configuration
pub fn session_store() -> SessionStore<BrowserStorage> {
    let keys = &config().storage;
    SessionStore::new(
        BrowserStorage,
        keys.token_key.clone(),
        keys.username_key.clone(),
    )
}

/// Get the held token, if any
pub fn get_token() -> Option<String> {
    session_store().token()
}

/// Identity restored from a previous visit
pub fn load_identity() -> Option<Identity> {
    session_store().load()
}

pub fn save_identity(identity: &Identity) {
    session_store().save(identity);
}

/// Forget token and username
pub fn clear_identity() {
    session_store().clear();
}
