use serde::{Deserialize, Serialize};

use crate::projections::p001_order_report::OrderReport;

/// Totals shown above the report tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_revenue: f64,
    pub total_cost: f64,
    /// Always `total_revenue - total_cost`, regardless of per-report profit
    pub total_profit: f64,
    pub total_orders: usize,
}

impl ReportSummary {
    pub fn from_order_reports(reports: &[OrderReport]) -> Self {
        let total_revenue: f64 = reports.iter().map(|r| r.total_revenue).sum();
        let total_cost: f64 = reports.iter().map(|r| r.total_cost).sum();
        Self {
            total_revenue,
            total_cost,
            total_profit: total_revenue - total_cost,
            total_orders: reports.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::OrderId;

    fn report(order_id: i64, revenue: f64, cost: f64, profit: f64) -> OrderReport {
        OrderReport {
            id: Some(order_id),
            object_id: None,
            order_id: OrderId(order_id),
            total_revenue: revenue,
            total_cost: cost,
            total_profit: profit,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ReportSummary::from_order_reports(&[]), ReportSummary::default());
    }

    #[test]
    fn test_profit_is_recomputed_from_totals() {
        let reports = vec![report(1, 100.0, 60.0, 0.0), report(2, 50.0, 20.0, 999.0)];
        let summary = ReportSummary::from_order_reports(&reports);
        assert_eq!(summary.total_revenue, 150.0);
        assert_eq!(summary.total_cost, 80.0);
        assert_eq!(summary.total_profit, 70.0);
        assert_eq!(summary.total_orders, 2);
    }
}
