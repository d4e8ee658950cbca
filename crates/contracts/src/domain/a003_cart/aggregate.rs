use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a001_product::Product;
use crate::domain::common::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Quantity limit reached for {name} (max {max_quantity})")]
    QuantityLimitExceeded { name: String, max_quantity: u32 },
}

/// One product selection in the cart
///
/// Price and stock limit are snapshots taken when the product was first added
/// and are not refreshed afterwards. The persisted field names are the ones
/// the blob has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
    #[serde(rename = "maxQuantity")]
    pub max_quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Stock left once this line is sold, based on the add-time snapshot
    pub fn remaining_stock(&self) -> u32 {
        self.max_quantity.saturating_sub(self.quantity)
    }
}

/// Ordered, product-unique list of cart lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Add one unit of `product`
    ///
    /// An existing line grows by one up to its recorded `max_quantity`; a new
    /// line starts at quantity 1 with the product's current price and stock
    /// as snapshot. On error the cart is unchanged.
    pub fn add(&mut self, product: &Product) -> Result<&CartLine, CartError> {
        let idx = match self.lines.iter().position(|l| l.product_id == product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                if line.quantity >= line.max_quantity {
                    return Err(CartError::QuantityLimitExceeded {
                        name: line.display_name.clone(),
                        max_quantity: line.max_quantity,
                    });
                }
                line.quantity += 1;
                idx
            }
            None => {
                if product.quantity == 0 {
                    return Err(CartError::QuantityLimitExceeded {
                        name: product.name.clone(),
                        max_quantity: 0,
                    });
                }
                self.lines.push(CartLine {
                    product_id: product.id,
                    display_name: product.name.clone(),
                    unit_price: product.price,
                    quantity: 1,
                    max_quantity: product.quantity,
                });
                self.lines.len() - 1
            }
        };
        Ok(&self.lines[idx])
    }

    /// Remove the line for `product_id`; returns whether a line was removed
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Take `purchased` lines out of the cart
    ///
    /// Units added since those lines were captured stay in the cart.
    pub fn settle(&mut self, purchased: &[CartLine]) {
        for bought in purchased {
            if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == bought.product_id) {
                line.quantity = line.quantity.saturating_sub(bought.quantity);
            }
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
