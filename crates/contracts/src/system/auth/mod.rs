use serde::{Deserialize, Serialize};

pub mod session;

pub use session::{Identity, SessionStore};

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /login`
///
/// The auth service may omit `username`; callers fall back to the name that
/// was typed into the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl LoginResponse {
    /// Identity to hold after a successful login, if the server issued a token
    pub fn into_identity(self, typed_username: &str) -> Option<Identity> {
        let token = self.token.filter(|t| !t.is_empty())?;
        Some(Identity {
            token,
            username: self
                .username
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| typed_username.to_string()),
        })
    }
}

/// Body of `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    /// Check the form before any network call
    pub fn validate(&self, confirm_password: &str) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("Username is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        if self.password != confirm_password {
            return Err("Password confirmation does not match");
        }
        Ok(())
    }
}

/// Response of `POST /auth/verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_falls_back_to_typed_username() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        let identity = resp.into_identity("lan").unwrap();
        assert_eq!(identity.token, "abc");
        assert_eq!(identity.username, "lan");
    }

    #[test]
    fn test_login_response_without_token() {
        let resp: LoginResponse = serde_json::from_str(r#"{"username": "lan"}"#).unwrap();
        assert!(resp.into_identity("lan").is_none());
    }

    #[test]
    fn test_register_validation() {
        let req = RegisterRequest {
            username: "lan".into(),
            password: "secret".into(),
        };
        assert!(req.validate("secret").is_ok());
        assert_eq!(req.validate("other"), Err("Password confirmation does not match"));
    }
}
