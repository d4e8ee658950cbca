use contracts::dashboards::d001_report_summary::ReportSummary;
use contracts::domain::common::{AggregateId, OrderId};
use contracts::projections::p001_order_report::OrderReport;
use contracts::projections::p002_product_report::ProductReport;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::stat_card::StatCard;
use crate::projections::p001_order_report::api as order_report_api;
use crate::projections::p001_order_report::ui::list::OrderReportTable;
use crate::projections::p002_product_report::api as product_report_api;
use crate::projections::p002_product_report::ui::list::ProductReportTable;
use crate::projections::p002_product_report::ui::statistics::ProductStatisticsLookup;
use crate::shared::dialog;
use crate::shared::format::format_price;

/// Reports tab: summary cards, both report tables and the statistics lookup
#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let (order_reports, set_order_reports) = signal(Vec::<OrderReport>::new());
    let (product_reports, set_product_reports) = signal(Vec::<ProductReport>::new());
    let (error, set_error) = signal(None::<String>);

    let summary = Memo::new(move |_| order_reports.with(|r| ReportSummary::from_order_reports(r)));

    let load = move || {
        spawn_local(async move {
            let orders = order_report_api::fetch_all().await;
            let products = product_report_api::fetch_all().await;
            match (orders, products) {
                (Ok(orders), Ok(products)) => {
                    set_order_reports.set(orders);
                    set_product_reports.set(products);
                    set_error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Error loading reports: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let generate = move || {
        let Some(input) = dialog::prompt("Order ID to report on:") else {
            return;
        };
        let order_id = match OrderId::from_string(&input) {
            Ok(id) => id,
            Err(_) => {
                set_error.set(Some("Order ID must be a number".to_string()));
                return;
            }
        };
        spawn_local(async move {
            match order_report_api::create(order_id).await {
                Ok(_) => {
                    dialog::alert("Report created!");
                    load();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_changed = Callback::new(move |_| load());
    let on_error = Callback::new(move |msg: String| set_error.set(Some(msg)));

    load();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Reports"</h2>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| generate()>
                        "Generate order report"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-cards">
                <StatCard label="Total revenue" value=Signal::derive(move || format_price(summary.get().total_revenue)) />
                <StatCard label="Total cost" value=Signal::derive(move || format_price(summary.get().total_cost)) />
                <StatCard
                    label="Profit"
                    value=Signal::derive(move || format_price(summary.get().total_profit))
                    accent="success"
                />
                <StatCard label="Orders" value=Signal::derive(move || summary.get().total_orders.to_string()) />
            </div>

            <OrderReportTable reports=order_reports on_changed=on_changed on_error=on_error />
            <ProductReportTable reports=product_reports on_changed=on_changed on_error=on_error />
            <ProductStatisticsLookup />
        </div>
    }
}
