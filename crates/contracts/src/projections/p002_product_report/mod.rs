pub mod dto;

pub use dto::{NewProductReport, ProductReport, ProductStatistics};
