pub mod aggregate;

pub use aggregate::{NewProduct, Product, ProductUpdate, StockRemoval};
