pub mod header;

pub use header::{AdminHeader, StoreHeader};
