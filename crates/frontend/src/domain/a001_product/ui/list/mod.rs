use contracts::domain::a001_product::{Product, StockRemoval};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_optional;
use crate::shared::dialog;
use crate::shared::format::format_price;
use crate::shared::list_utils::{cmp_f64, sort_list, SortState, Sortable};

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "price" => cmp_f64(self.price, other.price),
            "quantity" => self.quantity.cmp(&other.quantity),
            _ => Ordering::Equal,
        }
    }
}

/// Which form the modal shows
#[derive(Clone, Debug)]
enum Editor {
    Create,
    Edit(Product),
}

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (items, set_items) = signal(Vec::<Product>::new());
    let (error, set_error) = signal(None::<String>);
    let sort = RwSignal::new(SortState::new("id"));
    let editor = RwSignal::new(None::<Editor>);

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

    let on_saved = Callback::new(move |_| {
        editor.set(None);
        ctx.refresh_catalog();
        fetch();
    });
    let on_cancel = Callback::new(move |_| editor.set(None));

    let remove_stock = move |product: Product| {
        let Some(input) = dialog::prompt(&format!(
            "Amount of \"{}\" to remove (enter the full stock of {} or more to delete the product):",
            product.name, product.quantity
        )) else {
            return;
        };
        let removal = match StockRemoval::parse(&input) {
            Ok(removal) => removal,
            Err(msg) => {
                set_error.set(Some(msg.to_string()));
                return;
            }
        };
        spawn_local(async move {
            match api::remove_stock(product.id, &removal).await {
                Ok(()) => {
                    ctx.refresh_catalog();
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

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
                <h2>"Products"</h2>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Some(Editor::Create))>
                        "New product"
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
                            {header("name", "Name")}
                            <th class="table__header-cell">"Description"</th>
                            {header("price", "Price")}
                            {header("quantity", "Quantity")}
                            <th class="table__header-cell">"Updated"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|product| {
                            let for_edit = product.clone();
                            let for_removal = product.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{product.id.to_string()}</td>
                                    <td class="table__cell">{product.name.clone()}</td>
                                    <td class="table__cell">{product.description.clone().unwrap_or_default()}</td>
                                    <td class="table__cell">{format_price(product.price)}</td>
                                    <td class="table__cell">{product.quantity}</td>
                                    <td class="table__cell">{format_optional(product.updated_at.as_deref())}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| editor.set(Some(Editor::Edit(for_edit.clone())))
                                        >
                                            "Edit"
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| remove_stock(for_removal.clone())
                                        >
                                            "Remove stock"
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || editor.get().map(|mode| {
                let product = match mode {
                    Editor::Create => None,
                    Editor::Edit(product) => Some(product),
                };
                view! { <ProductDetails product=product on_saved=on_saved on_cancel=on_cancel /> }
            })}
        </div>
    }
}
