use contracts::shared::api_error::ApiError;
use contracts::system::auth::{
    Identity, LoginRequest, LoginResponse, RegisterRequest, VerifyResponse,
};

use crate::shared::api_utils::{decode, send, Credential, Method};

/// Message shown when the auth service answers 2xx without a token
pub const MISSING_TOKEN: &str = "No token received from the server";

/// Login with username and password
///
/// Returns the identity to hold, or `None` when the service accepted the
/// credentials but issued no token. The username falls back to the one typed
/// in when the service does not echo it.
pub async fn login(username: String, password: String) -> Result<Option<Identity>, ApiError> {
    let request = LoginRequest { username, password };
    let text = send(Method::Post, "/login", Some(&request), Credential::Anonymous).await?;
    let response: LoginResponse = decode(&text)?;

    Ok(response.into_identity(&request.username))
}

/// Create an account; the caller validates the form first
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    send(Method::Post, "/register", Some(request), Credential::Anonymous).await?;
    Ok(())
}

/// Ask the auth service whether `token` is still accepted
pub async fn verify_token(token: &str) -> Result<VerifyResponse, ApiError> {
    let text = send::<()>(Method::Post, "/auth/verify", None, Credential::Token(token)).await?;
    decode(&text)
}
