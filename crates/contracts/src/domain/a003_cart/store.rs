use crate::domain::a001_product::Product;
use crate::domain::common::ProductId;
use crate::shared::storage::KeyValueStorage;

use super::aggregate::{Cart, CartError, CartLine};

/// Session-owned cart persisted as a single JSON blob
///
/// Every mutation rewrites the whole blob before returning, so the stored
/// copy never lags behind the in-memory one.
#[derive(Clone)]
pub struct CartStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    cart: Cart,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Restore the cart saved under `key`, or start empty
    ///
    /// A blob that no longer parses is discarded rather than failing startup.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match storage.get_item(&key) {
            Some(raw) => serde_json::from_str::<Cart>(&raw).unwrap_or_else(|e| {
                log::warn!("Discarding unreadable cart blob: {}", e);
                Cart::new()
            }),
            None => Cart::new(),
        };
        Self { storage, key, cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn add(&mut self, product: &Product) -> Result<CartLine, CartError> {
        let line = self.cart.add(product)?.clone();
        self.persist();
        Ok(line)
    }

    pub fn remove(&mut self, product_id: ProductId) {
        self.cart.remove(product_id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Drop lines that were checked out, keeping anything added meanwhile
    pub fn settle(&mut self, purchased: &[CartLine]) {
        self.cart.settle(purchased);
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.cart) {
            Ok(blob) => self.storage.set_item(&self.key, &blob),
            Err(e) => log::error!("Failed to serialize cart: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    fn product(id: i64, price: f64, stock: u32) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            description: None,
            price,
            quantity: stock,
            owner: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_starts_empty_without_blob() {
        let storage = MemoryStorage::new();
        let store = CartStore::load(&storage, "cart");
        assert!(store.is_empty());
        assert_eq!(store.total(), 0.0);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_add_persists_and_reloads() {
        let storage = MemoryStorage::new();
        {
            let mut store = CartStore::load(&storage, "cart");
            store.add(&product(1, 10.0, 5)).unwrap();
            store.add(&product(1, 10.0, 5)).unwrap();
        }

        let reloaded = CartStore::load(&storage, "cart");
        assert_eq!(reloaded.lines().len(), 1);
        assert_eq!(reloaded.lines()[0].quantity, 2);
    }

    #[test]
    fn test_rejected_add_does_not_touch_storage() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::load(&storage, "cart");
        store.add(&product(1, 10.0, 1)).unwrap();
        let blob = storage.get_item("cart");

        assert!(store.add(&product(1, 10.0, 1)).is_err());
        assert_eq!(storage.get_item("cart"), blob);
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::load(&storage, "cart");
        store.add(&product(1, 10.0, 5)).unwrap();
        store.add(&product(2, 5.0, 5)).unwrap();

        store.remove(ProductId(1));
        assert_eq!(CartStore::load(&storage, "cart").lines().len(), 1);

        store.remove(ProductId(42));
        assert_eq!(CartStore::load(&storage, "cart").lines().len(), 1);

        store.clear();
        assert_eq!(storage.get_item("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_settle_rewrites_blob_cleared_by_another_copy() {
        let storage = MemoryStorage::new();
        let mut live = CartStore::load(&storage, "cart");
        live.add(&product(1, 10.0, 5)).unwrap();

        let mut checkout_copy = live.clone();
        let purchased = checkout_copy.lines().to_vec();
        live.add(&product(2, 5.0, 5)).unwrap();
        checkout_copy.clear();

        live.settle(&purchased);
        let reloaded = CartStore::load(&storage, "cart");
        assert_eq!(reloaded.lines().len(), 1);
        assert_eq!(reloaded.lines()[0].product_id, ProductId(2));
    }

    #[test]
    fn test_unreadable_blob_yields_empty_cart() {
        let storage = MemoryStorage::new();
        storage.set_item("cart", "{not json");
        let store = CartStore::load(&storage, "cart");
        assert!(store.is_empty());
    }

    #[test]
    fn test_reads_blob_written_by_older_client() {
        let storage = MemoryStorage::new();
        storage.set_item(
            "cart",
            r#"[{"id":3,"name":"Tea","price":20000,"quantity":2,"maxQuantity":10}]"#,
        );
        let store = CartStore::load(&storage, "cart");
        assert_eq!(store.total(), 40000.0);
        assert_eq!(store.item_count(), 2);
    }
}
