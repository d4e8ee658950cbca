use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::{OrderId, ProductId};

/// A single call of the checkout sequence, in execution order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// `POST /orders`
    CreateOrder { order_id: OrderId },
    /// `PUT /products/{id}` with the stock left after this purchase
    UpdateStock { product_id: ProductId, new_quantity: u32 },
    /// `PUT /orders/{id}` with status `completed`
    CompleteOrder { order_id: OrderId },
    /// `POST /reports/orders`
    CreateOrderReport { order_id: OrderId },
    /// `POST /reports/products`
    CreateProductReport { product_id: ProductId },
}

impl CheckoutStep {
    pub fn kind(&self) -> CheckoutStepKind {
        match self {
            Self::CreateOrder { .. } => CheckoutStepKind::CreateOrder,
            Self::UpdateStock { .. } => CheckoutStepKind::UpdateStock,
            Self::CompleteOrder { .. } => CheckoutStepKind::CompleteOrder,
            Self::CreateOrderReport { .. } => CheckoutStepKind::CreateOrderReport,
            Self::CreateProductReport { .. } => CheckoutStepKind::CreateProductReport,
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateOrder { order_id } => write!(f, "create order {}", order_id),
            Self::UpdateStock {
                product_id,
                new_quantity,
            } => write!(f, "set stock of product {} to {}", product_id, new_quantity),
            Self::CompleteOrder { order_id } => write!(f, "complete order {}", order_id),
            Self::CreateOrderReport { order_id } => {
                write!(f, "create report for order {}", order_id)
            }
            Self::CreateProductReport { product_id } => {
                write!(f, "create report for product {}", product_id)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStepKind {
    CreateOrder,
    UpdateStock,
    CompleteOrder,
    CreateOrderReport,
    CreateProductReport,
}

/// What happens to an already applied step when a later step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compensation {
    /// The effect stays on the server
    None,
}

/// Compensation applied per step kind when the sequence aborts
///
/// No step is compensated. A failed checkout may leave a pending order,
/// decremented stock or an order report without product reports behind, and
/// retrying it applies the stock decrement again.
pub const COMPENSATION_POLICY: [(CheckoutStepKind, Compensation); 5] = [
    (CheckoutStepKind::CreateOrder, Compensation::None),
    (CheckoutStepKind::UpdateStock, Compensation::None),
    (CheckoutStepKind::CompleteOrder, Compensation::None),
    (CheckoutStepKind::CreateOrderReport, Compensation::None),
    (CheckoutStepKind::CreateProductReport, Compensation::None),
];

impl CheckoutStepKind {
    pub fn compensation(self) -> Compensation {
        COMPENSATION_POLICY
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, c)| *c)
            .unwrap_or(Compensation::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_covers_every_kind_once() {
        let kinds = [
            CheckoutStepKind::CreateOrder,
            CheckoutStepKind::UpdateStock,
            CheckoutStepKind::CompleteOrder,
            CheckoutStepKind::CreateOrderReport,
            CheckoutStepKind::CreateProductReport,
        ];
        for kind in kinds {
            let entries = COMPENSATION_POLICY.iter().filter(|(k, _)| *k == kind).count();
            assert_eq!(entries, 1, "{kind:?}");
            assert_eq!(kind.compensation(), Compensation::None);
        }
    }

    #[test]
    fn test_step_display() {
        let step = CheckoutStep::UpdateStock {
            product_id: ProductId(3),
            new_quantity: 7,
        };
        assert_eq!(step.to_string(), "set stock of product 3 to 7");
        assert_eq!(step.kind(), CheckoutStepKind::UpdateStock);
    }
}
