use contracts::domain::a001_product::Product;
use contracts::domain::a002_order::Order;
use contracts::domain::common::{AggregateId, OrderId, ProductId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::view_model::{OrderCreateViewModel, OrderForm};
use crate::domain::a002_order::api;
use crate::shared::date_utils::format_optional;
use crate::shared::format::format_price;
use crate::shared::modal_frame::ModalFrame;

/// Admin form creating an order from the product list
#[component]
pub fn OrderCreate(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = OrderCreateViewModel::new();

    let text_field = move |label: &'static str,
                           input_type: &'static str,
                           get: fn(&OrderForm) -> String,
                           set: fn(&mut OrderForm, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=input_type
                    class="form-control"
                    prop:value=move || vm.form.with(|f| get(f))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    let item_row = move |key: u32| {
        let (selected, quantity) = vm.form.with_untracked(|f| {
            f.items
                .iter()
                .find(|r| r.key == key)
                .map(|r| {
                    (
                        r.product_id.map(|id| id.as_string()).unwrap_or_default(),
                        r.quantity.clone(),
                    )
                })
                .unwrap_or_default()
        });
        view! {
            <div class="order-item">
                <div class="form-group">
                    <label>"Product"</label>
                    <select
                        class="form-control"
                        prop:value=selected
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                if let Some(row) = f.item_mut(key) {
                                    row.product_id = ProductId::from_string(&value).ok();
                                }
                            });
                        }
                    >
                        <option value="">"-- Select a product --"</option>
                        {move || products.get().into_iter().map(|p| view! {
                            <option value=p.id.as_string()>
                                {format!("{} - {}", p.name, format_price(p.price))}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Quantity"</label>
                    <input
                        type="number"
                        min="1"
                        class="form-control"
                        prop:value=quantity
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                if let Some(row) = f.item_mut(key) {
                                    row.quantity = value;
                                }
                            });
                        }
                    />
                </div>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.form.update(|f| f.remove_item(key))
                >
                    "Remove"
                </Button>
            </div>
        }
    };

    view! {
        <ModalFrame title="New order" on_close=on_cancel modal_class="order-modal">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form">
                {text_field("Order ID", "number", |f| f.id.clone(), |f, v| f.id = v)}
                {text_field("Customer name", "text", |f| f.customer_name.clone(), |f, v| f.customer_name = v)}
                {text_field("Customer e-mail", "email", |f| f.customer_email.clone(), |f, v| f.customer_email = v)}

                <div class="order-items">
                    <h4>"Items"</h4>
                    <For
                        each=move || vm.form.with(|f| f.items.iter().map(|r| r.key).collect::<Vec<_>>())
                        key=|key| *key
                        children=item_row
                    />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.form.update(|f| f.add_item())>
                        "Add item"
                    </Button>
                </div>

                <div class="form-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| products.with_untracked(|list| vm.save_command(list, on_saved))
                        disabled=Signal::derive(move || vm.is_saving.get())
                    >
                        {move || if vm.is_saving.get() { "Saving..." } else { "Create order" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                </div>
            </div>
        </ModalFrame>
    }
}

/// Read-only order summary, fetched fresh from the order service
#[component]
pub fn OrderView(order_id: OrderId, on_close: Callback<()>) -> impl IntoView {
    let (order, set_order) = signal(None::<Order>);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::fetch_by_id(order_id).await {
            Ok(o) => set_order.set(Some(o)),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    });

    view! {
        <ModalFrame title=format!("Order #{}", order_id) on_close=on_close>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || order.get().map(|o| view! {
                <dl class="order-details">
                    <dt>"ID"</dt><dd>{o.id.to_string()}</dd>
                    <dt>"Customer"</dt><dd>{o.customer_name}</dd>
                    <dt>"E-mail"</dt><dd>{o.customer_email}</dd>
                    <dt>"Total"</dt><dd>{format_price(o.total_amount)}</dd>
                    <dt>"Status"</dt><dd>{o.status.as_str().to_string()}</dd>
                    <dt>"Created"</dt><dd>{format_optional(o.created_at.as_deref())}</dd>
                </dl>
            })}
        </ModalFrame>
    }
}
