use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::OrderId;

/// Identifier of an order report
///
/// The reports service answers with a numeric `id` when it has one and with
/// its storage object id (a string) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportKey {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Revenue/cost/profit snapshot of one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub order_id: OrderId,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl OrderReport {
    /// Key to reference this report from product reports
    pub fn key(&self) -> Option<ReportKey> {
        self.id
            .map(ReportKey::Numeric)
            .or_else(|| self.object_id.clone().map(ReportKey::Text))
    }

    /// ID used in `/reports/orders/{id}`; the service also accepts the order id
    pub fn row_id(&self) -> i64 {
        self.id.unwrap_or(self.order_id.value())
    }
}

/// Body of `POST /reports/orders`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderReport {
    pub order_id: OrderId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_prefers_numeric_id() {
        let raw = r#"{"id": 17, "_id": "65f0c0ffee", "order_id": 17,
                      "total_revenue": 100.0, "total_cost": 60.0, "total_profit": 40.0}"#;
        let report: OrderReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.key(), Some(ReportKey::Numeric(17)));
    }

    #[test]
    fn test_key_falls_back_to_object_id() {
        let raw = r#"{"_id": "65f0c0ffee", "order_id": 17}"#;
        let report: OrderReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.key(), Some(ReportKey::Text("65f0c0ffee".into())));
        assert_eq!(report.row_id(), 17);
    }

    #[test]
    fn test_no_key() {
        let report: OrderReport = serde_json::from_str(r#"{"order_id": 3}"#).unwrap();
        assert_eq!(report.key(), None);
    }

    #[test]
    fn test_report_key_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ReportKey::Numeric(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&ReportKey::Text("a".into())).unwrap(), "\"a\"");
    }
}
