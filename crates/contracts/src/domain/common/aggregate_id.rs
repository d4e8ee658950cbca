use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + fmt::Debug
{
    /// Render the ID as it appears in a resource path
    fn as_string(&self) -> String;

    /// Parse an ID from form input or a path segment
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Numeric product identifier assigned by whoever creates the product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

/// Numeric order identifier, generated client-side at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

macro_rules! numeric_id {
    ($name:ident) => {
        impl $name {
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }
    };
}

numeric_id!(ProductId);
numeric_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_trims_input() {
        assert_eq!(ProductId::from_string(" 42 "), Ok(ProductId(42)));
        assert_eq!(OrderId(7).as_string(), "7");
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        let err = OrderId::from_string("abc").unwrap_err();
        assert!(err.starts_with("Invalid OrderId"));
    }

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&ProductId(5)).unwrap();
        assert_eq!(json, "5");
    }
}
