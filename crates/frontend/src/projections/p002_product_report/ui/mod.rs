pub mod list;
pub mod statistics;
