pub mod context;
pub mod gateway;
pub mod ui;
