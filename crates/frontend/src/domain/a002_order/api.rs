use contracts::domain::a002_order::{Order, OrderDraft, OrderUpdate};
use contracts::domain::common::OrderId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_json, put_json};

pub async fn fetch_all() -> Result<Vec<Order>, ApiError> {
    get_json("/orders").await
}

pub async fn fetch_by_id(id: OrderId) -> Result<Order, ApiError> {
    get_json(&format!("/orders/{}", id)).await
}

/// Create an order with its items; the service answers with the stored order
pub async fn create(draft: &OrderDraft) -> Result<Order, ApiError> {
    post_json("/orders", draft).await
}

pub async fn update(id: OrderId, update: &OrderUpdate) -> Result<(), ApiError> {
    put_json(&format!("/orders/{}", id), update).await
}

pub async fn delete_order(id: OrderId) -> Result<(), ApiError> {
    delete(&format!("/orders/{}", id)).await
}
