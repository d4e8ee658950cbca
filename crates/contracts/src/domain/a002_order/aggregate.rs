use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::{OrderId, ProductId};

/// Order status as stored by the orders service
///
/// The service accepts any string; only the two values the client writes are
/// named, everything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order as returned by `GET /orders` and `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Line of an order being created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraftItem {
    pub id: i64,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderDraftItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Body of `POST /orders`
///
/// Built transiently (from the cart at checkout, or from the admin order
/// form), sent once and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderDraftItem>,
}

impl OrderDraft {
    /// Item IDs are derived from the order ID and the 1-based line position
    ///
    /// `None` when the order ID is too large to derive item IDs from.
    pub fn item_id(order_id: OrderId, position: usize) -> Option<i64> {
        let position = i64::try_from(position).ok()?;
        order_id.value().checked_mul(1000)?.checked_add(position)
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderDraftItem::line_total).sum()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.customer_name.trim().is_empty() {
            return Err("Customer name is required");
        }
        if self.customer_email.trim().is_empty() {
            return Err("Customer e-mail is required");
        }
        if self.items.is_empty() {
            return Err("Add at least one product to the order");
        }
        if self.items.iter().any(|i| i.quantity == 0) {
            return Err("Item quantity must be at least 1");
        }
        Ok(())
    }
}

/// Body of `PUT /orders/{id}`; the service only applies the fields present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderUpdate {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_unknown_values() {
        let s: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(s, OrderStatus::Other("shipped".into()));
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"shipped\"");
        assert_eq!(
            serde_json::to_value(OrderUpdate::status(OrderStatus::Completed)).unwrap(),
            serde_json::json!({ "status": "completed" })
        );
    }

    #[test]
    fn test_order_defaults_missing_fields() {
        let raw = r#"{"id": 17, "customer_name": "an", "customer_email": "an@example.com"}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, 0.0);
    }

    #[test]
    fn test_draft_validation_and_total() {
        let mut draft = OrderDraft {
            id: OrderId(1),
            customer_name: "an".into(),
            customer_email: "an@example.com".into(),
            items: vec![],
        };
        assert_eq!(draft.validate(), Err("Add at least one product to the order"));

        draft.items.push(OrderDraftItem {
            id: OrderDraft::item_id(draft.id, 1).unwrap(),
            product_id: ProductId(2),
            product_name: "Tea".into(),
            quantity: 3,
            unit_price: 2.5,
        });
        assert!(draft.validate().is_ok());
        assert_eq!(draft.total(), 7.5);
        assert_eq!(draft.items[0].id, 1001);
    }

    #[test]
    fn test_item_id_rejects_overflowing_order_id() {
        use crate::domain::common::AggregateId;

        assert_eq!(OrderDraft::item_id(OrderId(42), 3), Some(42_003));
        let huge = OrderId::from_string("9300000000000000").unwrap();
        assert_eq!(OrderDraft::item_id(huge, 1), None);
        assert_eq!(OrderDraft::item_id(OrderId(i64::MAX / 1000), 1000), None);
    }
}
