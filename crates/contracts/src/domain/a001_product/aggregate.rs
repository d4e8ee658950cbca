use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::ProductId;

// ============================================================================
// Aggregate
// ============================================================================

/// Product as returned by `GET /products`
///
/// `quantity` is the stock currently on hand; it doubles as the maximum
/// quantity a shopper may put into the cart. The service stores whatever
/// number it was given, so negative stock reads as 0 and fractions are
/// rounded down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, deserialize_with = "stock_level")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    /// Case-insensitive match on name or description
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        if filter.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&filter)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&filter))
                .unwrap_or(false)
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

fn stock_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if !raw.is_finite() || raw <= 0.0 {
        return Ok(0);
    }
    Ok(raw.floor().min(f64::from(u32::MAX)) as u32)
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /products`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.id <= 0 {
            return Err("Product ID must be a positive number");
        }
        if self.name.trim().is_empty() {
            return Err("Product name is required");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number");
        }
        Ok(())
    }
}

/// Body of `PUT /products/{id}`; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl ProductUpdate {
    /// Update that only sets the stock level
    pub fn stock(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    /// Full replacement of the editable fields of `product`
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            description: Some(product.description.clone().unwrap_or_default()),
            price: Some(product.price),
            quantity: Some(product.quantity),
        }
    }
}

/// Body of `DELETE /products/{id}`
///
/// The server reduces stock by `amount`, or deletes the product when
/// `amount` reaches the current stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRemoval {
    pub amount: u32,
}

impl StockRemoval {
    /// Parse the amount typed by an operator
    pub fn parse(input: &str) -> Result<Self, &'static str> {
        match input.trim().parse::<u32>() {
            Ok(0) | Err(_) => Err("Amount must be a positive whole number"),
            Ok(amount) => Ok(Self { amount }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, description: Option<&str>) -> Product {
        Product {
            id: ProductId(1),
            name: name.to_string(),
            description: description.map(str::to_string),
            price: 10.0,
            quantity: 3,
            owner: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_filter_matches_name_and_description() {
        let p = product("Green Tea", Some("Loose leaf from Thai Nguyen"));
        assert!(p.matches_filter("tea"));
        assert!(p.matches_filter("THAI"));
        assert!(p.matches_filter("  "));
        assert!(!p.matches_filter("coffee"));
    }

    #[test]
    fn test_filter_without_description() {
        let p = product("Rice", None);
        assert!(!p.matches_filter("leaf"));
    }

    #[test]
    fn test_stock_update_only_serializes_quantity() {
        let json = serde_json::to_value(ProductUpdate::stock(4)).unwrap();
        assert_eq!(json, serde_json::json!({ "quantity": 4 }));
    }

    #[test]
    fn test_stock_removal_parse() {
        assert_eq!(StockRemoval::parse(" 3 "), Ok(StockRemoval { amount: 3 }));
        assert!(StockRemoval::parse("0").is_err());
        assert!(StockRemoval::parse("-2").is_err());
        assert!(StockRemoval::parse("abc").is_err());
    }

    #[test]
    fn test_new_product_validation() {
        let mut dto = NewProduct {
            id: 1,
            name: "Tea".into(),
            description: String::new(),
            price: 5.0,
            quantity: 1,
        };
        assert!(dto.validate().is_ok());
        dto.name = " ".into();
        assert_eq!(dto.validate(), Err("Product name is required"));
    }

    #[test]
    fn test_product_deserializes_server_payload() {
        let raw = r#"{"id": 3, "name": "Tea", "price": 12.5, "quantity": 8,
                      "owner": "admin", "created_at": "2024-03-15T14:02:26"}"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, ProductId(3));
        assert_eq!(p.description, None);
        assert_eq!(p.owner.as_deref(), Some("admin"));
    }

    #[test]
    fn test_odd_stock_values_do_not_break_the_list() {
        let raw = r#"[
            {"id": 1, "name": "A", "price": 1, "quantity": -3},
            {"id": 2, "name": "B", "price": 1, "quantity": 2.7},
            {"id": 3, "name": "C", "price": 1, "quantity": null},
            {"id": 4, "name": "D", "price": 1, "quantity": 5}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(raw).unwrap();
        let stock: Vec<u32> = products.iter().map(|p| p.quantity).collect();
        assert_eq!(stock, vec![0, 2, 0, 5]);
        assert!(!products[0].in_stock());
    }
}
