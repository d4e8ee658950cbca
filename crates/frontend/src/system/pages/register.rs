use contracts::system::auth::RegisterRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::system::auth::api;

/// Delay before moving on to the login page after a successful registration
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        set_success_message.set(None);

        let request = RegisterRequest {
            username: username.get(),
            password: password.get(),
        };
        if let Err(msg) = request.validate(&confirm.get()) {
            set_error_message.set(Some(msg.to_string()));
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    set_success_message.set(Some(
                        "Registration successful! Redirecting to sign in...".to_string(),
                    ));
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    ctx.navigate(Page::Login);
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Create an account"</h2>

                {move || error_message.get().map(|e| view! { <div class="error-message">{e}</div> })}
                {move || success_message.get().map(|m| view! { <div class="success-message">{m}</div> })}

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

                    <div class="form-group">
                        <label for="confirm-password">"Confirm password"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Already registered? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Login);
                        }>"Sign in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
