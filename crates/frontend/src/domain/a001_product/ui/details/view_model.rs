use contracts::domain::a001_product::{NewProduct, Product, ProductUpdate};
use contracts::domain::common::ProductId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api;

/// Raw text of the product form inputs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    fn price(&self) -> Result<f64, &'static str> {
        self.price
            .trim()
            .parse::<f64>()
            .map_err(|_| "Price must be a number")
    }

    fn quantity(&self) -> Result<u32, &'static str> {
        self.quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| "Quantity must be a whole number")
    }

    /// Body for `POST /products`
    pub fn to_new_product(&self) -> Result<NewProduct, &'static str> {
        let id = self
            .id
            .trim()
            .parse::<i64>()
            .map_err(|_| "Product ID must be a positive number")?;
        let product = NewProduct {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price()?,
            quantity: self.quantity()?,
        };
        product.validate()?;
        Ok(product)
    }

    /// Body for `PUT /products/{id}`; every editable field is sent
    pub fn to_update(&self) -> Result<ProductUpdate, &'static str> {
        if self.name.trim().is_empty() {
            return Err("Product name is required");
        }
        let price = self.price()?;
        if !price.is_finite() || price < 0.0 {
            return Err("Price must be a non-negative number");
        }
        Ok(ProductUpdate {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            price: Some(price),
            quantity: Some(self.quantity()?),
        })
    }
}

/// ViewModel for the product create/edit form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    /// Product being edited; `None` when creating
    pub editing: Option<ProductId>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(product: Option<&Product>) -> Self {
        Self {
            form: RwSignal::new(product.map(ProductForm::from_product).unwrap_or_default()),
            editing: product.map(|p| p.id),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    /// Validate, then create or update; `on_saved` runs only on success
    pub fn save_command(&self, on_saved: Callback<()>) {
        let form = self.form.get_untracked();
        let error = self.error;
        let is_saving = self.is_saving;

        let request = match self.editing {
            Some(id) => form.to_update().map(|update| SaveRequest::Update(id, update)),
            None => form.to_new_product().map(SaveRequest::Create),
        };
        let request = match request {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_string()));
                return;
            }
        };

        error.set(None);
        is_saving.set(true);
        spawn_local(async move {
            let result = match &request {
                SaveRequest::Create(product) => api::create(product).await,
                SaveRequest::Update(id, update) => api::update(*id, update).await,
            };
            is_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}

enum SaveRequest {
    Create(NewProduct),
    Update(ProductId, ProductUpdate),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, name: &str, price: &str, quantity: &str) -> ProductForm {
        ProductForm {
            id: id.to_string(),
            name: name.to_string(),
            description: " Loose leaf ".to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_new_product_is_trimmed_and_parsed() {
        let product = form(" 7 ", "Tea", "35000", "12").to_new_product().unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.description, "Loose leaf");
        assert_eq!(product.price, 35000.0);
        assert_eq!(product.quantity, 12);
    }

    #[test]
    fn test_new_product_rejects_bad_numbers() {
        assert!(form("x", "Tea", "1", "1").to_new_product().is_err());
        assert!(form("1", "Tea", "cheap", "1").to_new_product().is_err());
        assert_eq!(
            form("1", "Tea", "1", "-2").to_new_product(),
            Err("Quantity must be a whole number")
        );
        assert_eq!(
            form("1", "  ", "1", "1").to_new_product(),
            Err("Product name is required")
        );
    }

    #[test]
    fn test_update_carries_every_field() {
        let update = form("1", "Tea", "12.5", "3").to_update().unwrap();
        assert_eq!(update.name.as_deref(), Some("Tea"));
        assert_eq!(update.price, Some(12.5));
        assert_eq!(update.quantity, Some(3));
        assert_eq!(form("1", "Tea", "-1", "3").to_update(), Err("Price must be a non-negative number"));
    }
}
