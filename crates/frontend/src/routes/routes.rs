use leptos::prelude::*;

use crate::domain::a001_product::ui::catalog::ProductCatalog;
use crate::domain::a003_cart::context::use_cart;
use crate::domain::a003_cart::ui::cart_modal::CartModal;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::header::{AdminHeader, StoreHeader};
use crate::layout::tabs::AdminTabs;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

#[component]
fn Storefront() -> impl IntoView {
    let cart = use_cart();

    view! {
        <StoreHeader />
        <main class="main">
            <ProductCatalog />
        </main>
        <Show when=move || cart.is_open.get()>
            <CartModal />
        </Show>
    }
}

#[component]
fn AdminConsole() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminHeader />
            <main class="main">
                <AdminTabs />
            </main>
        </RequireAdmin>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    move || match ctx.page.get() {
        Page::Storefront => view! { <Storefront /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Register => view! { <RegisterPage /> }.into_any(),
        Page::Admin => view! { <AdminConsole /> }.into_any(),
    }
}
