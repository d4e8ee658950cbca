use contracts::domain::a001_product::Product;
use contracts::domain::a002_order::{OrderDraft, OrderDraftItem};
use contracts::domain::common::{AggregateId, OrderId, ProductId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_order::api;

/// One item row of the order form
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    /// Stable key for rendering and removal
    pub key: u32,
    pub product_id: Option<ProductId>,
    pub quantity: String,
}

/// Raw state of the admin order form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderForm {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<ItemRow>,
    next_key: u32,
}

impl OrderForm {
    pub fn add_item(&mut self) {
        self.next_key += 1;
        self.items.push(ItemRow {
            key: self.next_key,
            product_id: None,
            quantity: "1".to_string(),
        });
    }

    pub fn remove_item(&mut self, key: u32) {
        self.items.retain(|row| row.key != key);
    }

    pub fn item_mut(&mut self, key: u32) -> Option<&mut ItemRow> {
        self.items.iter_mut().find(|row| row.key == key)
    }

    /// Build the order body, pricing each item from `products`
    ///
    /// Rows without a selected product are ignored.
    pub fn to_draft(&self, products: &[Product]) -> Result<OrderDraft, &'static str> {
        let order_id =
            OrderId::from_string(&self.id).map_err(|_| "Order ID must be a number")?;

        let mut items = Vec::new();
        for row in &self.items {
            let Some(product_id) = row.product_id else {
                continue;
            };
            let product = products
                .iter()
                .find(|p| p.id == product_id)
                .ok_or("Selected product no longer exists")?;
            let quantity = row
                .quantity
                .trim()
                .parse::<u32>()
                .map_err(|_| "Item quantity must be a whole number")?;
            items.push(OrderDraftItem {
                id: OrderDraft::item_id(order_id, items.len() + 1).ok_or("Order ID is too large")?,
                product_id,
                product_name: product.name.clone(),
                quantity,
                unit_price: product.price,
            });
        }

        let draft = OrderDraft {
            id: order_id,
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_string(),
            items,
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// ViewModel for the order creation form
#[derive(Clone, Copy)]
pub struct OrderCreateViewModel {
    pub form: RwSignal<OrderForm>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl OrderCreateViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OrderForm::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, products: &[Product], on_saved: Callback<()>) {
        let draft = match self.form.with_untracked(|f| f.to_draft(products)) {
            Ok(draft) => draft,
            Err(msg) => {
                self.error.set(Some(msg.to_string()));
                return;
            }
        };

        let error = self.error;
        let is_saving = self.is_saving;
        error.set(None);
        is_saving.set(true);
        spawn_local(async move {
            let result = api::create(&draft).await;
            is_saving.set(false);
            match result {
                Ok(order) => {
                    log::info!("Created order {}", order.id);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}

impl Default for OrderCreateViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![Product {
            id: ProductId(4),
            name: "Kettle".to_string(),
            description: None,
            price: 250000.0,
            quantity: 8,
            owner: None,
            created_at: None,
            updated_at: None,
        }]
    }

    fn filled_form() -> OrderForm {
        let mut form = OrderForm {
            id: "42".to_string(),
            customer_name: "Lan".to_string(),
            customer_email: "lan@example.com".to_string(),
            ..OrderForm::default()
        };
        form.add_item();
        form.add_item();
        let first = form.items[0].key;
        if let Some(row) = form.item_mut(first) {
            row.product_id = Some(ProductId(4));
            row.quantity = "2".to_string();
        }
        form
    }

    #[test]
    fn test_rows_without_product_are_skipped() {
        let draft = filled_form().to_draft(&catalog()).unwrap();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].id, 42_001);
        assert_eq!(draft.items[0].product_name, "Kettle");
        assert_eq!(draft.total(), 500000.0);
    }

    #[test]
    fn test_at_least_one_item_is_required() {
        let mut form = filled_form();
        let first = form.items[0].key;
        form.remove_item(first);
        assert_eq!(
            form.to_draft(&catalog()),
            Err("Add at least one product to the order")
        );
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let mut form = filled_form();
        form.items[0].quantity = "0".to_string();
        assert_eq!(form.to_draft(&catalog()), Err("Item quantity must be at least 1"));
        form.items[0].quantity = "two".to_string();
        assert_eq!(
            form.to_draft(&catalog()),
            Err("Item quantity must be a whole number")
        );
    }

    #[test]
    fn test_order_id_must_be_numeric() {
        let mut form = filled_form();
        form.id = "abc".to_string();
        assert_eq!(form.to_draft(&catalog()), Err("Order ID must be a number"));
    }

    #[test]
    fn test_order_id_too_large_for_item_ids() {
        let mut form = filled_form();
        form.id = "9300000000000000".to_string();
        assert_eq!(form.to_draft(&catalog()), Err("Order ID is too large"));
    }
}
