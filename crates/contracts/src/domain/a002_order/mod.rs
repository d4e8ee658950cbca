pub mod aggregate;

pub use aggregate::{Order, OrderDraft, OrderDraftItem, OrderStatus, OrderUpdate};
