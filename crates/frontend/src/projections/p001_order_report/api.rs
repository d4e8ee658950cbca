use contracts::domain::common::OrderId;
use contracts::projections::p001_order_report::{NewOrderReport, OrderReport};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_json};

pub async fn fetch_all() -> Result<Vec<OrderReport>, ApiError> {
    get_json("/reports/orders").await
}

pub async fn fetch_by_id(id: i64) -> Result<OrderReport, ApiError> {
    get_json(&format!("/reports/orders/{}", id)).await
}

/// Generate the report of `order_id`; the service computes the figures itself
pub async fn create(order_id: OrderId) -> Result<OrderReport, ApiError> {
    post_json("/reports/orders", &NewOrderReport { order_id }).await
}

pub async fn delete_report(id: i64) -> Result<(), ApiError> {
    delete(&format!("/reports/orders/{}", id)).await
}
