use contracts::domain::a001_product::{NewProduct, Product, ProductUpdate, StockRemoval};
use contracts::domain::common::ProductId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete_with_body, get_json, post_unit, put_json};

/// Fetch all products
pub async fn fetch_all() -> Result<Vec<Product>, ApiError> {
    get_json("/products").await
}

pub async fn fetch_by_id(id: ProductId) -> Result<Product, ApiError> {
    get_json(&format!("/products/{}", id)).await
}

pub async fn create(product: &NewProduct) -> Result<(), ApiError> {
    post_unit("/products", product).await
}

pub async fn update(id: ProductId, update: &ProductUpdate) -> Result<(), ApiError> {
    put_json(&format!("/products/{}", id), update).await
}

/// Reduce stock by `removal.amount`; the service deletes the product once stock runs out
pub async fn remove_stock(id: ProductId, removal: &StockRemoval) -> Result<(), ApiError> {
    delete_with_body(&format!("/products/{}", id), removal).await
}
