use contracts::system::auth::Identity;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub identity: Option<Identity>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.identity.as_ref().map(|i| i.username.clone())
    }
}

/// Auth context provider component
///
/// The identity persisted by a previous visit is restored synchronously; it is
/// only verified against the auth service when the admin console is opened.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        identity: storage::load_identity(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist a fresh identity and publish it
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, identity: Identity) {
    log::info!("Signed in as {}", identity.username);
    storage::save_identity(&identity);
    set_auth_state.set(AuthState {
        identity: Some(identity),
    });
}

/// Drop the identity from storage and from the UI
pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_identity();
    set_auth_state.set(AuthState::default());
}
