use async_trait::async_trait;
use contracts::domain::a001_product::ProductUpdate;
use contracts::domain::a002_order::{Order, OrderDraft, OrderStatus, OrderUpdate};
use contracts::domain::common::{OrderId, ProductId};
use contracts::projections::p001_order_report::ReportKey;
use contracts::projections::p002_product_report::NewProductReport;
use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_checkout::CheckoutGateway;

use crate::domain::{a001_product, a002_order};
use crate::projections::{p001_order_report, p002_product_report};

/// Checkout calls routed to the resource clients over HTTP
pub struct HttpCheckoutGateway;

#[async_trait(?Send)]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
        a002_order::api::create(draft).await
    }

    async fn update_product_stock(
        &self,
        product_id: ProductId,
        new_quantity: u32,
    ) -> Result<(), ApiError> {
        a001_product::api::update(product_id, &ProductUpdate::stock(new_quantity)).await
    }

    async fn complete_order(&self, order_id: OrderId) -> Result<(), ApiError> {
        a002_order::api::update(order_id, &OrderUpdate::status(OrderStatus::Completed)).await
    }

    async fn create_order_report(&self, order_id: OrderId) -> Result<Option<ReportKey>, ApiError> {
        let report = p001_order_report::api::create(order_id).await?;
        Ok(report.key())
    }

    async fn create_product_report(&self, report: &NewProductReport) -> Result<(), ApiError> {
        p002_product_report::api::create(report).await
    }
}
