use contracts::projections::p001_order_report::OrderReport;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p001_order_report::api;
use crate::shared::date_utils::format_optional;
use crate::shared::dialog;
use crate::shared::format::format_price;

/// Order report table; `on_changed` fires after a row was deleted
#[component]
pub fn OrderReportTable(
    #[prop(into)] reports: Signal<Vec<OrderReport>>,
    on_changed: Callback<()>,
    on_error: Callback<String>,
) -> impl IntoView {
    let delete_report = move |id: i64| {
        if !dialog::confirm("Delete this report?") {
            return;
        }
        spawn_local(async move {
            match api::delete_report(id).await {
                Ok(()) => on_changed.run(()),
                Err(e) => on_error.run(e.to_string()),
            }
        });
    };

    view! {
        <div class="table-container">
            <h3>"Order reports"</h3>
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"ID"</th>
                        <th class="table__header-cell">"Order"</th>
                        <th class="table__header-cell">"Revenue"</th>
                        <th class="table__header-cell">"Cost"</th>
                        <th class="table__header-cell">"Profit"</th>
                        <th class="table__header-cell">"Created"</th>
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = reports.get();
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="table__cell table__cell--empty" colspan="7">"No order reports yet."</td></tr>
                            }.into_any();
                        }
                        rows.into_iter().map(|report| {
                            let row_id = report.row_id();
                            let key = report
                                .key()
                                .map(|k| k.to_string())
                                .unwrap_or_else(|| row_id.to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{key}</td>
                                    <td class="table__cell">{report.order_id.to_string()}</td>
                                    <td class="table__cell">{format_price(report.total_revenue)}</td>
                                    <td class="table__cell">{format_price(report.total_cost)}</td>
                                    <td class="table__cell profit">{format_price(report.total_profit)}</td>
                                    <td class="table__cell">{format_optional(report.created_at.as_deref())}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| delete_report(row_id)
                                        >
                                            "Delete"
                                        </Button>
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
