use thiserror::Error;

use crate::domain::a002_order::Order;
use crate::domain::a003_cart::{CartLine, CartStore};
use crate::domain::common::OrderId;
use crate::projections::p001_order_report::ReportKey;
use crate::projections::p002_product_report::NewProductReport;
use crate::shared::api_error::ApiError;
use crate::shared::storage::KeyValueStorage;
use crate::system::auth::Identity;

use super::gateway::CheckoutGateway;
use super::request::CheckoutRequest;
use super::response::CheckoutReceipt;
use super::steps::CheckoutStep;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to buy; no request was sent
    #[error("Your cart is empty")]
    EmptyCart,

    /// No identity is held; no request was sent
    #[error("Please log in before checking out")]
    NotAuthenticated,

    /// The order id leaves no room for item ids; no request was sent
    #[error("Order ID {0} is too large")]
    OrderIdOutOfRange(OrderId),

    /// A call failed; `completed` lists the calls that were applied before it
    /// and stay applied
    #[error("{source}")]
    StepFailed {
        step: CheckoutStep,
        completed: Vec<CheckoutStep>,
        source: ApiError,
    },
}

impl CheckoutError {
    pub fn requires_login(&self) -> bool {
        match self {
            Self::NotAuthenticated => true,
            Self::StepFailed { source, .. } => source.is_auth_failure(),
            Self::EmptyCart | Self::OrderIdOutOfRange(_) => false,
        }
    }
}

/// Steps applied so far
#[derive(Default)]
struct Progress {
    completed: Vec<CheckoutStep>,
}

impl Progress {
    fn record<T>(&mut self, step: CheckoutStep, result: Result<T, ApiError>) -> Result<T, CheckoutError> {
        match result {
            Ok(value) => {
                log::info!("checkout: {}", step);
                self.completed.push(step);
                Ok(value)
            }
            Err(source) => {
                log::error!("checkout: {} failed: {}", step, source);
                Err(CheckoutError::StepFailed {
                    step,
                    completed: std::mem::take(&mut self.completed),
                    source,
                })
            }
        }
    }
}

/// Checks that need no network call: a non-empty cart and a held token
pub fn check_preconditions<'i, S: KeyValueStorage>(
    cart: &CartStore<S>,
    identity: Option<&'i Identity>,
) -> Result<&'i Identity, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    identity
        .filter(|i| !i.token.is_empty())
        .ok_or(CheckoutError::NotAuthenticated)
}

/// Drives the checkout sequence against a [`CheckoutGateway`]
///
/// Steps run strictly one after another, each awaiting the previous response:
/// create order, set stock per cart line, complete order, create order
/// report, create product reports (only when the order report has a key).
/// The cart is cleared only after the last step succeeds.
pub struct CheckoutSaga<'a, G: CheckoutGateway> {
    gateway: &'a G,
    email_domain: String,
}

impl<'a, G: CheckoutGateway> CheckoutSaga<'a, G> {
    pub fn new(gateway: &'a G, email_domain: impl Into<String>) -> Self {
        Self {
            gateway,
            email_domain: email_domain.into(),
        }
    }

    /// Check out with a freshly generated order id
    pub async fn run<S: KeyValueStorage>(
        &self,
        cart: &mut CartStore<S>,
        identity: Option<&Identity>,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        let identity = check_preconditions(cart, identity)?;
        let request = CheckoutRequest::for_identity(identity, &self.email_domain);
        self.execute(cart, request).await
    }

    /// Check out under a caller-chosen order id
    pub async fn run_with_order_id<S: KeyValueStorage>(
        &self,
        cart: &mut CartStore<S>,
        identity: Option<&Identity>,
        order_id: OrderId,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        let identity = check_preconditions(cart, identity)?;
        let request = CheckoutRequest::with_order_id(order_id, identity, &self.email_domain);
        self.execute(cart, request).await
    }

    async fn execute<S: KeyValueStorage>(
        &self,
        cart: &mut CartStore<S>,
        request: CheckoutRequest,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        let lines: Vec<CartLine> = cart.lines().to_vec();
        let draft = request
            .build_draft(cart.cart())
            .ok_or(CheckoutError::OrderIdOutOfRange(request.order_id))?;
        let mut progress = Progress::default();

        let order: Order = progress.record(
            CheckoutStep::CreateOrder {
                order_id: draft.id,
            },
            self.gateway.create_order(&draft).await,
        )?;
        let order_id = order.id;

        let mut stock_updates = Vec::with_capacity(lines.len());
        for line in &lines {
            let new_quantity = line.remaining_stock();
            progress.record(
                CheckoutStep::UpdateStock {
                    product_id: line.product_id,
                    new_quantity,
                },
                self.gateway
                    .update_product_stock(line.product_id, new_quantity)
                    .await,
            )?;
            stock_updates.push((line.product_id, new_quantity));
        }

        progress.record(
            CheckoutStep::CompleteOrder { order_id },
            self.gateway.complete_order(order_id).await,
        )?;

        let order_report: Option<ReportKey> = progress.record(
            CheckoutStep::CreateOrderReport { order_id },
            self.gateway.create_order_report(order_id).await,
        )?;

        let mut product_reports = 0;
        if let Some(report_key) = &order_report {
            for line in &lines {
                let body = NewProductReport {
                    order_report_id: report_key.clone(),
                    product_id: line.product_id,
                };
                progress.record(
                    CheckoutStep::CreateProductReport {
                        product_id: line.product_id,
                    },
                    self.gateway.create_product_report(&body).await,
                )?;
                product_reports += 1;
            }
        } else {
            log::warn!("checkout: order report for {} has no id, skipping product reports", order_id);
        }

        cart.clear();
        log::info!("checkout: order {} completed", order_id);

        Ok(CheckoutReceipt {
            order,
            stock_updates,
            order_report,
            product_reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;
    use crate::domain::a002_order::{OrderDraft, OrderStatus};
    use crate::domain::common::ProductId;
    use crate::shared::storage::MemoryStorage;
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateOrder(usize),
        UpdateStock(i64, u32),
        CompleteOrder(i64),
        CreateOrderReport(i64),
        CreateProductReport(ReportKey, i64),
    }

    /// Records every call; calls matching `fail_on` answer with a 500
    #[derive(Default)]
    struct FakeGateway {
        calls: RefCell<Vec<Call>>,
        fail_on: Option<fn(&Call) -> bool>,
        report_key: Option<ReportKey>,
        server_order_id: Option<i64>,
    }

    impl FakeGateway {
        fn answering_with_report(key: ReportKey) -> Self {
            Self {
                report_key: Some(key),
                ..Self::default()
            }
        }

        fn call(&self, call: Call) -> Result<(), ApiError> {
            let fail = self.fail_on.map(|f| f(&call)).unwrap_or(false);
            self.calls.borrow_mut().push(call);
            if fail {
                return Err(ApiError::Server {
                    status: 500,
                    message: "Order service unavailable".into(),
                });
            }
            Ok(())
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl CheckoutGateway for FakeGateway {
        async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
            self.call(Call::CreateOrder(draft.items.len()))?;
            Ok(Order {
                id: self.server_order_id.map(OrderId).unwrap_or(draft.id),
                customer_name: draft.customer_name.clone(),
                customer_email: draft.customer_email.clone(),
                total_amount: draft.total(),
                status: OrderStatus::Pending,
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_product_stock(
            &self,
            product_id: ProductId,
            quantity: u32,
        ) -> Result<(), ApiError> {
            self.call(Call::UpdateStock(product_id.value(), quantity))
        }

        async fn complete_order(&self, order_id: OrderId) -> Result<(), ApiError> {
            self.call(Call::CompleteOrder(order_id.value()))
        }

        async fn create_order_report(
            &self,
            order_id: OrderId,
        ) -> Result<Option<ReportKey>, ApiError> {
            self.call(Call::CreateOrderReport(order_id.value()))?;
            Ok(self.report_key.clone())
        }

        async fn create_product_report(&self, report: &NewProductReport) -> Result<(), ApiError> {
            self.call(Call::CreateProductReport(
                report.order_report_id.clone(),
                report.product_id.value(),
            ))
        }
    }

    fn product(id: i64, price: f64, stock: u32) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            description: None,
            price,
            quantity: stock,
            owner: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn identity() -> Identity {
        Identity {
            token: "jwt".into(),
            username: "lan".into(),
        }
    }

    /// Two lines: product 1 (stock 5) x2, product 2 (stock 4) x3
    fn two_line_cart(storage: &MemoryStorage) -> CartStore<&MemoryStorage> {
        let mut cart = CartStore::load(storage, "cart");
        let a = product(1, 10.0, 5);
        let b = product(2, 5.0, 4);
        cart.add(&a).unwrap();
        cart.add(&a).unwrap();
        for _ in 0..3 {
            cart.add(&b).unwrap();
        }
        cart
    }

    #[tokio::test]
    async fn test_successful_checkout_issues_full_sequence_and_clears_cart() {
        let storage = MemoryStorage::new();
        let mut cart = two_line_cart(&storage);
        let gateway = FakeGateway::answering_with_report(ReportKey::Numeric(500));
        let saga = CheckoutSaga::new(&gateway, "example.com");

        let receipt = saga
            .run_with_order_id(&mut cart, Some(&identity()), OrderId(500))
            .await
            .unwrap();

        assert_eq!(
            gateway.calls(),
            vec![
                Call::CreateOrder(2),
                Call::UpdateStock(1, 3),
                Call::UpdateStock(2, 1),
                Call::CompleteOrder(500),
                Call::CreateOrderReport(500),
                Call::CreateProductReport(ReportKey::Numeric(500), 1),
                Call::CreateProductReport(ReportKey::Numeric(500), 2),
            ]
        );
        assert_eq!(receipt.order.id, OrderId(500));
        assert_eq!(receipt.product_reports, 2);
        assert_eq!(receipt.stock_updates, vec![(ProductId(1), 3), (ProductId(2), 1)]);
        assert!(cart.is_empty());
        assert_eq!(storage.get_item("cart").as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_later_steps_use_server_order_id() {
        let storage = MemoryStorage::new();
        let mut cart = two_line_cart(&storage);
        let gateway = FakeGateway {
            server_order_id: Some(777),
            ..FakeGateway::default()
        };
        let saga = CheckoutSaga::new(&gateway, "example.com");

        saga.run_with_order_id(&mut cart, Some(&identity()), OrderId(1))
            .await
            .unwrap();

        let calls = gateway.calls();
        assert!(calls.contains(&Call::CompleteOrder(777)));
        assert!(calls.contains(&Call::CreateOrderReport(777)));
    }

    #[tokio::test]
    async fn test_no_report_key_skips_product_reports() {
        let storage = MemoryStorage::new();
        let mut cart = two_line_cart(&storage);
        let gateway = FakeGateway::default();
        let saga = CheckoutSaga::new(&gateway, "example.com");

        let receipt = saga.run(&mut cart, Some(&identity())).await.unwrap();

        assert_eq!(receipt.product_reports, 0);
        assert_eq!(receipt.order_report, None);
        assert_eq!(gateway.calls().len(), 5);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_status_update_failure_keeps_stock_updates_and_cart() {
        let storage = MemoryStorage::new();
        let mut cart = two_line_cart(&storage);
        let blob_before = storage.get_item("cart");
        let gateway = FakeGateway {
            fail_on: Some(|c| matches!(c, Call::CompleteOrder(_))),
            report_key: Some(ReportKey::Numeric(1)),
            ..FakeGateway::default()
        };
        let saga = CheckoutSaga::new(&gateway, "example.com");

        let err = saga
            .run_with_order_id(&mut cart, Some(&identity()), OrderId(42))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Order service unavailable");
        match &err {
            CheckoutError::StepFailed {
                step, completed, ..
            } => {
                assert_eq!(*step, CheckoutStep::CompleteOrder { order_id: OrderId(42) });
                assert_eq!(completed.len(), 3);
                assert_eq!(
                    completed[1],
                    CheckoutStep::UpdateStock {
                        product_id: ProductId(1),
                        new_quantity: 3
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            gateway.calls(),
            vec![
                Call::CreateOrder(2),
                Call::UpdateStock(1, 3),
                Call::UpdateStock(2, 1),
                Call::CompleteOrder(42),
            ]
        );
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(storage.get_item("cart"), blob_before);
    }

    #[tokio::test]
    async fn test_stock_update_failure_stops_remaining_lines() {
        let storage = MemoryStorage::new();
        let mut cart = two_line_cart(&storage);
        let gateway = FakeGateway {
            fail_on: Some(|c| matches!(c, Call::UpdateStock(1, _))),
            ..FakeGateway::default()
        };
        let saga = CheckoutSaga::new(&gateway, "example.com");

        let err = saga.run(&mut cart, Some(&identity())).await.unwrap_err();

        assert!(matches!(err, CheckoutError::StepFailed { .. }));
        assert_eq!(gateway.calls().len(), 2);
        assert!(!cart.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_makes_no_calls() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::load(&storage, "cart");
        let gateway = FakeGateway::default();
        let saga = CheckoutSaga::new(&gateway, "example.com");

        let err = saga.run(&mut cart, Some(&identity())).await.unwrap_err();

        assert!(matches!(err, CheckoutError::EmptyCart));
        assert_eq!(err.to_string(), "Your cart is empty");
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_identity_makes_no_calls() {
        let storage = MemoryStorage::new();
        let mut cart = two_line_cart(&storage);
        let gateway = FakeGateway::default();
        let saga = CheckoutSaga::new(&gateway, "example.com");

        let err = saga.run(&mut cart, None).await.unwrap_err();
        assert!(err.requires_login());

        let blank = Identity {
            token: String::new(),
            username: "lan".into(),
        };
        let err = saga.run(&mut cart, Some(&blank)).await.unwrap_err();
        assert!(matches!(err, CheckoutError::NotAuthenticated));

        assert!(gateway.calls().is_empty());
        assert_eq!(cart.lines().len(), 2);
    }

    #[tokio::test]
    async fn test_oversized_order_id_makes_no_calls() {
        let storage = MemoryStorage::new();
        let mut cart = two_line_cart(&storage);
        let gateway = FakeGateway::default();
        let saga = CheckoutSaga::new(&gateway, "example.com");

        let err = saga
            .run_with_order_id(&mut cart, Some(&identity()), OrderId(i64::MAX))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::OrderIdOutOfRange(_)));
        assert!(!err.requires_login());
        assert!(gateway.calls().is_empty());
        assert_eq!(cart.lines().len(), 2);
    }
}
