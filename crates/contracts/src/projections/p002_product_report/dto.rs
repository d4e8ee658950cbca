use serde::{Deserialize, Serialize};

use crate::domain::common::ProductId;
use crate::projections::p001_order_report::ReportKey;

/// Sales of one product within one order report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub order_report_id: ReportKey,
    pub product_id: ProductId,
    #[serde(default)]
    pub total_sold: u32,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /reports/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProductReport {
    pub order_report_id: ReportKey,
    pub product_id: ProductId,
}

/// Response of `GET /reports/products/{id}/statistics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStatistics {
    pub product_id: ProductId,
    #[serde(default)]
    pub total_sold: u32,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub total_profit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_report_from_service() {
        let raw = r#"{"id": "65f0", "order_report_id": 17, "product_id": 2,
                      "total_sold": 3, "revenue": 30.0, "cost": 18.0, "profit": 12.0}"#;
        let report: ProductReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.order_report_id, ReportKey::Numeric(17));
        assert_eq!(report.total_sold, 3);
    }

    #[test]
    fn test_new_product_report_body() {
        let body = NewProductReport {
            order_report_id: ReportKey::Numeric(17),
            product_id: ProductId(2),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "order_report_id": 17, "product_id": 2 })
        );
    }
}
