use contracts::projections::p002_product_report::ProductReport;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p002_product_report::api;
use crate::shared::dialog;
use crate::shared::format::format_price;

#[component]
pub fn ProductReportTable(
    #[prop(into)] reports: Signal<Vec<ProductReport>>,
    on_changed: Callback<()>,
    on_error: Callback<String>,
) -> impl IntoView {
    let delete_report = move |id: String| {
        if !dialog::confirm("Delete this report?") {
            return;
        }
        spawn_local(async move {
            match api::delete_report(&id).await {
                Ok(()) => on_changed.run(()),
                Err(e) => on_error.run(e.to_string()),
            }
        });
    };

    view! {
        <div class="table-container">
            <h3>"Product reports"</h3>
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"ID"</th>
                        <th class="table__header-cell">"Order report"</th>
                        <th class="table__header-cell">"Product"</th>
                        <th class="table__header-cell">"Sold"</th>
                        <th class="table__header-cell">"Revenue"</th>
                        <th class="table__header-cell">"Cost"</th>
                        <th class="table__header-cell">"Profit"</th>
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = reports.get();
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="table__cell table__cell--empty" colspan="8">"No product reports yet."</td></tr>
                            }.into_any();
                        }
                        rows.into_iter().map(|report| {
                            let id = report.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{id.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{report.order_report_id.to_string()}</td>
                                    <td class="table__cell">{report.product_id.to_string()}</td>
                                    <td class="table__cell">{report.total_sold}</td>
                                    <td class="table__cell">{format_price(report.revenue)}</td>
                                    <td class="table__cell">{format_price(report.cost)}</td>
                                    <td class="table__cell profit">{format_price(report.profit)}</td>
                                    <td class="table__cell table__cell--actions">
                                        {id.map(|id| view! {
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| delete_report(id.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        })}
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
