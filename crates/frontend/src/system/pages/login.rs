use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::system::auth::api::{self, MISSING_TOKEN};
use crate::system::auth::context::{sign_in, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(Some(identity)) => {
                    sign_in(set_auth_state, identity);
                    ctx.navigate(Page::Admin);
                }
                Ok(None) => set_error_message.set(Some(MISSING_TOKEN.to_string())),
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "No account? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Register);
                        }>"Register"</a>
                    </p>
                    <p>
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Storefront);
                        }>"Back to the shop"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
