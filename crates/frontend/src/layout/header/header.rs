use leptos::prelude::*;

use crate::domain::a003_cart::context::use_cart;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::system::auth::context::{sign_out, use_auth};

fn use_global() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[component]
pub fn StoreHeader() -> impl IntoView {
    let ctx = use_global();
    let cart = use_cart();
    let (auth_state, set_auth_state) = use_auth();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Shop"</span>
            </div>
            <div class="header__actions">
                <Show
                    when=move || auth_state.get().is_authenticated()
                    fallback=move || view! {
                        <button class="button button--ghost" on:click=move |_| ctx.navigate(Page::Login)>
                            "Sign in"
                        </button>
                    }
                >
                    <span class="header__user">
                        {move || format!("Hello, {}", auth_state.get().username().unwrap_or_default())}
                    </span>
                    <button class="button button--ghost" on:click=move |_| ctx.navigate(Page::Admin)>
                        "Admin"
                    </button>
                    <button class="button button--ghost" on:click=move |_| sign_out(set_auth_state)>
                        "Sign out"
                    </button>
                </Show>
                <button class="button button--primary header__cart" on:click=move |_| cart.toggle()>
                    "Cart "
                    <span class="badge">{move || cart.item_count()}</span>
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn AdminHeader() -> impl IntoView {
    let ctx = use_global();
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        sign_out(set_auth_state);
        ctx.navigate(Page::Storefront);
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Shop administration"</span>
            </div>
            <div class="header__actions">
                <span class="header__user">
                    {move || format!("Hello, {} (Admin)", auth_state.get().username().unwrap_or_default())}
                </span>
                <button class="button button--ghost" on:click=move |_| ctx.navigate(Page::Storefront)>
                    "Back to the shop"
                </button>
                <button class="button button--ghost" on:click=logout>"Sign out"</button>
            </div>
        </header>
    }
}
