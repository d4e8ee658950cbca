pub mod aggregate;
pub mod store;

pub use aggregate::{Cart, CartError, CartLine};
pub use store::CartStore;
