use contracts::usecases::u501_checkout::{check_preconditions, CheckoutSaga};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_cart::context::use_cart;
use crate::domain::a003_cart::gateway::HttpCheckoutGateway;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::config::config;
use crate::shared::dialog;
use crate::shared::format::format_price;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
enum Notice {
    Error(String),
    Success(String),
}

/// Cart contents with checkout
#[component]
pub fn CartModal() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let cart = use_cart();
    let (auth_state, _) = use_auth();
    let notice = RwSignal::new(None::<Notice>);
    let is_checking_out = RwSignal::new(false);

    let close = Callback::new(move |_| cart.is_open.set(false));

    let checkout = move || {
        if is_checking_out.get_untracked() {
            return;
        }
        let identity = auth_state.get_untracked().identity;
        let mut store = cart.store.get_untracked();

        if let Err(e) = check_preconditions(&store, identity.as_ref()) {
            notice.set(Some(Notice::Error(e.to_string())));
            if e.requires_login() {
                dialog::alert(&e.to_string());
                cart.is_open.set(false);
                ctx.navigate(Page::Login);
            }
            return;
        }
        if !dialog::confirm("Proceed to checkout?") {
            return;
        }

        let purchased = store.lines().to_vec();
        notice.set(None);
        is_checking_out.set(true);
        spawn_local(async move {
            let gateway = HttpCheckoutGateway;
            let saga = CheckoutSaga::new(&gateway, config().checkout.customer_email_domain.clone());
            match saga.run(&mut store, identity.as_ref()).await {
                Ok(receipt) => {
                    cart.settle(&purchased);
                    ctx.refresh_catalog();
                    notice.set(Some(Notice::Success(format!(
                        "Payment successful! Order #{}",
                        receipt.order.id
                    ))));
                }
                Err(e) => {
                    notice.set(Some(Notice::Error(e.to_string())));
                    if e.requires_login() {
                        cart.is_open.set(false);
                        ctx.navigate(Page::Login);
                    }
                }
            }
            is_checking_out.set(false);
        });
    };

    view! {
        <ModalFrame title="Your cart" on_close=close modal_class="cart-modal">
            {move || notice.get().map(|n| match n {
                Notice::Error(msg) => view! { <div class="error">{msg}</div> }.into_any(),
                Notice::Success(msg) => view! { <div class="success-message">{msg}</div> }.into_any(),
            })}

            <div class="cart-items">
                {move || {
                    let lines = cart.store.with(|s| s.lines().to_vec());
                    if lines.is_empty() {
                        return view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any();
                    }
                    lines
                        .into_iter()
                        .map(|line| {
                            let product_id = line.product_id;
                            view! {
                                <div class="cart-item">
                                    <div class="cart-item__info">
                                        <h4>{line.display_name.clone()}</h4>
                                        <p>{format!("{} x {}", format_price(line.unit_price), line.quantity)}</p>
                                    </div>
                                    <div class="cart-item__total">
                                        <p>{format_price(line.line_total())}</p>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| cart.remove(product_id)
                                        >
                                            "Remove"
                                        </Button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <div class="cart-total">
                <span>"Total: "</span>
                <strong>{move || format_price(cart.store.with(|s| s.total()))}</strong>
            </div>

            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| checkout()
                    disabled=Signal::derive(move || is_checking_out.get())
                >
                    {move || if is_checking_out.get() { "Processing..." } else { "Checkout" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
