use contracts::domain::a001_product::Product;
use contracts::domain::a002_order::Order;
use contracts::domain::common::OrderId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a001_product::api as product_api;
use crate::domain::a002_order::api;
use crate::domain::a002_order::ui::details::{OrderCreate, OrderView};
use crate::shared::date_utils::format_optional;
use crate::shared::dialog;
use crate::shared::format::format_price;
use crate::shared::list_utils::{cmp_f64, sort_list, SortState, Sortable};

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "customer" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            "total" => cmp_f64(self.total_amount, other.total_amount),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Dialog {
    Create,
    View(OrderId),
}

#[component]
pub fn OrderList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Order>::new());
    let (products, set_products) = signal(Vec::<Product>::new());
    let (error, set_error) = signal(None::<String>);
    let sort = RwSignal::new(SortState::new("id"));
    let dialog_state = RwSignal::new(None::<Dialog>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let open_create = move || {
        // The form prices items from the current product list
        spawn_local(async move {
            match product_api::fetch_all().await {
                Ok(list) => {
                    set_products.set(list);
                    dialog_state.set(Some(Dialog::Create));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let delete_order = move |id: OrderId| {
        if !dialog::confirm(&format!("Delete order #{}?", id)) {
            return;
        }
        spawn_local(async move {
            match api::delete_order(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        dialog_state.set(None);
        fetch();
    });
    let on_close = Callback::new(move |_| dialog_state.set(None));

    let sorted_items = move || {
        let mut list = items.get();
        sort.with(|s| sort_list(&mut list, s));
        list
    };

    let header = move |field: &'static str, label: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| sort.update(|s| s.toggle(field))
            >
                {label}
                <span class="table__sort-indicator">{move || sort.with(|s| s.indicator(field))}</span>
            </th>
        }
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Orders"</h2>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        "New order"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header("id", "ID")}
                            {header("customer", "Customer")}
                            <th class="table__header-cell">"E-mail"</th>
                            {header("total", "Total")}
                            {header("status", "Status")}
                            {header("created_at", "Created")}
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|order| {
                            let id = order.id;
                            let status = order.status.as_str().to_string();
                            let status_class = format!("status status--{}", status.to_lowercase());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{id.to_string()}</td>
                                    <td class="table__cell">{order.customer_name}</td>
                                    <td class="table__cell">{order.customer_email}</td>
                                    <td class="table__cell">{format_price(order.total_amount)}</td>
                                    <td class="table__cell"><span class=status_class>{status}</span></td>
                                    <td class="table__cell">{format_optional(order.created_at.as_deref())}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| dialog_state.set(Some(Dialog::View(id)))
                                        >
                                            "View"
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| delete_order(id)
                                        >
                                            "Delete"
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || dialog_state.get().map(|d| match d {
                Dialog::Create => view! {
                    <OrderCreate products=products on_saved=on_saved on_cancel=on_close />
                }.into_any(),
                Dialog::View(id) => view! { <OrderView order_id=id on_close=on_close /> }.into_any(),
            })}
        </div>
    }
}
