use serde::{Deserialize, Serialize};

use crate::domain::a002_order::Order;
use crate::domain::common::ProductId;
use crate::projections::p001_order_report::ReportKey;

/// Outcome of a completed checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub order: Order,
    /// Stock written per product, in cart order
    pub stock_updates: Vec<(ProductId, u32)>,
    pub order_report: Option<ReportKey>,
    pub product_reports: usize,
}
