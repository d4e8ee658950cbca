use contracts::domain::a001_product::Product;
use contracts::domain::a003_cart::{CartError, CartLine, CartStore};
use contracts::domain::common::ProductId;
use leptos::prelude::*;

use crate::shared::browser_storage::BrowserStorage;
use crate::shared::config::config;

pub type BrowserCart = CartStore<BrowserStorage>;

/// Reactive handle on the session's cart
///
/// Mutations go through a copy of the store which is published only when the
/// store accepted the change, so subscribers never observe a rejected add.
#[derive(Clone, Copy)]
pub struct CartContext {
    pub store: RwSignal<BrowserCart>,
    pub is_open: RwSignal<bool>,
}

impl CartContext {
    pub fn load() -> Self {
        let store = CartStore::load(BrowserStorage, config().storage.cart_key.clone());
        log::debug!("Cart restored with {} line(s)", store.lines().len());
        Self {
            store: RwSignal::new(store),
            is_open: RwSignal::new(false),
        }
    }

    pub fn add_product(&self, product: &Product) -> Result<CartLine, CartError> {
        let mut store = self.store.get_untracked();
        let line = store.add(product)?;
        self.store.set(store);
        Ok(line)
    }

    pub fn remove(&self, product_id: ProductId) {
        self.store.update(|store| store.remove(product_id));
    }

    /// Drop the lines a checkout consumed; units added meanwhile stay
    pub fn settle(&self, purchased: &[CartLine]) {
        self.store.update(|store| store.settle(purchased));
    }

    pub fn item_count(&self) -> u32 {
        self.store.with(|store| store.item_count())
    }

    pub fn toggle(&self) {
        self.is_open.update(|open| *open = !*open);
    }
}

#[component]
pub fn CartProvider(children: Children) -> impl IntoView {
    provide_context(CartContext::load());
    children()
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartProvider not found in component tree")
}
