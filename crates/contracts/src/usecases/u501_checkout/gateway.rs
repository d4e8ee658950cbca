use async_trait::async_trait;

use crate::domain::a002_order::{Order, OrderDraft};
use crate::domain::common::{OrderId, ProductId};
use crate::projections::p001_order_report::ReportKey;
use crate::projections::p002_product_report::NewProductReport;
use crate::shared::api_error::ApiError;

/// The REST calls checkout needs, one method per call
///
/// Implementations attach the held credential themselves. Futures are not
/// `Send`: the browser client runs on a single-threaded executor.
#[async_trait(?Send)]
pub trait CheckoutGateway {
    /// `POST /orders`; returns the created order with its canonical id
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ApiError>;

    /// `PUT /products/{id}` setting stock to `quantity`
    async fn update_product_stock(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), ApiError>;

    /// `PUT /orders/{id}` setting status to `completed`
    async fn complete_order(&self, order_id: OrderId) -> Result<(), ApiError>;

    /// `POST /reports/orders`; returns the report key if the response has one
    async fn create_order_report(&self, order_id: OrderId) -> Result<Option<ReportKey>, ApiError>;

    /// `POST /reports/products`
    async fn create_product_report(&self, report: &NewProductReport) -> Result<(), ApiError>;
}
