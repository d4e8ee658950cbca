use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::context::{sign_out, use_auth};
use crate::layout::global_context::{AppGlobalContext, Page};

/// Renders `children` only for a held identity the auth service still accepts
///
/// Without an identity, or when verification fails, the session is cleared and
/// the login page is shown.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (verified, set_verified) = signal(false);

    Effect::new(move |_| {
        let Some(identity) = auth_state.get().identity else {
            set_verified.set(false);
            ctx.navigate(Page::Login);
            return;
        };

        spawn_local(async move {
            match api::verify_token(&identity.token).await {
                Ok(response) if response.valid => set_verified.set(true),
                Ok(response) => {
                    log::warn!(
                        "Token rejected: {}",
                        response.error.unwrap_or_else(|| "invalid".to_string())
                    );
                    sign_out(set_auth_state);
                }
                Err(e) => {
                    log::warn!("Token verification failed: {}", e);
                    sign_out(set_auth_state);
                }
            }
        });
    });

    view! {
        <Show
            when=move || verified.get() && auth_state.get().is_authenticated()
            fallback=|| view! { <div class="loading">"Checking session..."</div> }
        >
            {children()}
        </Show>
    }
}
