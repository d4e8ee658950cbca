use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid client configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub checkout: CheckoutConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Gateway origin; empty means "same origin as the page"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Domain of the placeholder e-mail attached to storefront orders
    pub customer_email_domain: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub cart_key: String,
    pub token_key: String,
    pub username_key: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[checkout]
customer_email_domain = "example.com"

[storage]
cart_key = "cart"
token_key = "jwt_token"
username_key = "username"
"#;

impl ClientConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            checkout: CheckoutConfig {
                customer_email_domain: "example.com".to_string(),
            },
            storage: StorageConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: "cart".to_string(),
            token_key: "jwt_token".to_string(),
            username_key: "username".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_custom_base_url() {
        let raw = DEFAULT_CONFIG.replace(r#"base_url = """#, r#"base_url = "http://localhost""#);
        let config = ClientConfig::from_toml(&raw).unwrap();
        assert_eq!(config.api.base_url, "http://localhost");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let err = ClientConfig::from_toml("[api]\nbase_url = \"\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Invalid client configuration"));
    }
}
