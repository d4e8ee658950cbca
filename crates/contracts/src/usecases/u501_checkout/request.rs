use serde::{Deserialize, Serialize};

use crate::domain::a002_order::{OrderDraft, OrderDraftItem};
use crate::domain::a003_cart::Cart;
use crate::domain::common::OrderId;
use crate::system::auth::Identity;

/// Who the order is for and under which id it is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub order_id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
}

impl CheckoutRequest {
    /// Request for the logged-in shopper with a fresh order id
    ///
    /// Storefront accounts carry no e-mail, so a placeholder
    /// `{username}@{email_domain}` is used.
    pub fn for_identity(identity: &Identity, email_domain: &str) -> Self {
        Self::with_order_id(generate_order_id(), identity, email_domain)
    }

    pub fn with_order_id(order_id: OrderId, identity: &Identity, email_domain: &str) -> Self {
        Self {
            order_id,
            customer_name: identity.username.clone(),
            customer_email: format!("{}@{}", identity.username, email_domain),
        }
    }

    /// `None` when the order id leaves no room for item ids
    pub fn build_draft(&self, cart: &Cart) -> Option<OrderDraft> {
        let items = cart
            .lines()
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                Some(OrderDraftItem {
                    id: OrderDraft::item_id(self.order_id, idx + 1)?,
                    product_id: line.product_id,
                    product_name: line.display_name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(OrderDraft {
            id: self.order_id,
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            items,
        })
    }
}

/// Millisecond timestamp; unique enough for one shopper's session
pub fn generate_order_id() -> OrderId {
    OrderId(chrono::Utc::now().timestamp_millis())
}
