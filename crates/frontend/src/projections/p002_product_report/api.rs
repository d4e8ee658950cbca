use contracts::domain::common::ProductId;
use contracts::projections::p002_product_report::{
    NewProductReport, ProductReport, ProductStatistics,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_unit};

pub async fn fetch_all() -> Result<Vec<ProductReport>, ApiError> {
    get_json("/reports/products").await
}

pub async fn fetch_by_id(id: &str) -> Result<ProductReport, ApiError> {
    get_json(&format!("/reports/products/{}", id)).await
}

pub async fn create(report: &NewProductReport) -> Result<(), ApiError> {
    post_unit("/reports/products", report).await
}

pub async fn delete_report(id: &str) -> Result<(), ApiError> {
    delete(&format!("/reports/products/{}", id)).await
}

/// Lifetime sales figures of one product across all reports
pub async fn fetch_statistics(product_id: ProductId) -> Result<ProductStatistics, ApiError> {
    get_json(&format!("/reports/products/{}/statistics", product_id)).await
}
