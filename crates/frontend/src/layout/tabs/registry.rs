//! Tab content registry: the one place mapping admin tabs to views

use leptos::prelude::*;

use crate::dashboards::d001_report_summary::ui::ReportsDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_order::ui::list::OrderList;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminTab {
    Products,
    Orders,
    Reports,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Products, AdminTab::Orders, AdminTab::Reports];

    pub fn title(self) -> &'static str {
        match self {
            AdminTab::Products => "Products",
            AdminTab::Orders => "Orders",
            AdminTab::Reports => "Reports",
        }
    }
}

pub fn render_tab_content(tab: AdminTab) -> AnyView {
    match tab {
        AdminTab::Products => view! { <ProductList /> }.into_any(),
        AdminTab::Orders => view! { <OrderList /> }.into_any(),
        AdminTab::Reports => view! { <ReportsDashboard /> }.into_any(),
    }
}
