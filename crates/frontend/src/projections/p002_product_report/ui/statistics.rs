use contracts::domain::common::{AggregateId, ProductId};
use contracts::projections::p002_product_report::ProductStatistics;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p002_product_report::api;
use crate::shared::format::format_price;

/// Lifetime sales of a single product, looked up by id
#[component]
pub fn ProductStatisticsLookup() -> impl IntoView {
    let (product_id, set_product_id) = signal(String::new());
    let (stats, set_stats) = signal(None::<ProductStatistics>);
    let (error, set_error) = signal(None::<String>);

    let lookup = move || {
        let id = match ProductId::from_string(&product_id.get_untracked()) {
            Ok(id) => id,
            Err(_) => {
                set_error.set(Some("Product ID must be a number".to_string()));
                return;
            }
        };
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_statistics(id).await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    set_stats.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="statistics-lookup">
            <h3>"Product statistics"</h3>
            <div class="statistics-lookup__form">
                <input
                    type="number"
                    class="form-control"
                    placeholder="Product ID"
                    prop:value=move || product_id.get()
                    on:input=move |ev| set_product_id.set(event_target_value(&ev))
                />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| lookup()>
                    "Look up"
                </Button>
            </div>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || stats.get().map(|s| view! {
                <dl class="statistics">
                    <dt>"Product"</dt><dd>{s.product_id.to_string()}</dd>
                    <dt>"Units sold"</dt><dd>{s.total_sold}</dd>
                    <dt>"Revenue"</dt><dd>{format_price(s.total_revenue)}</dd>
                    <dt>"Cost"</dt><dd>{format_price(s.total_cost)}</dd>
                    <dt>"Profit"</dt><dd>{format_price(s.total_profit)}</dd>
                </dl>
            })}
        </div>
    }
}
