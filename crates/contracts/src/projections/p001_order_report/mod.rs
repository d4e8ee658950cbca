pub mod dto;

pub use dto::{NewOrderReport, OrderReport, ReportKey};
