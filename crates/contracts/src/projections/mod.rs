pub mod p001_order_report;
pub mod p002_product_report;
