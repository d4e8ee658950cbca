//! API utilities for frontend-gateway communication
//!
//! Every resource client goes through [`send`], which attaches the stored
//! credential and turns non-success responses into [`ApiError::Server`]
//! carrying the body's `error` message.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::config;
use crate::system::auth::storage;

const AUTHORIZATION: &str = "Authorization";

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the client configuration; when that is empty the
/// gateway is assumed to serve the page itself and the window origin is used.
pub fn api_base() -> String {
    let configured = config().api.base_url.trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path such as `/products/7`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Which credential a request carries in its `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential<'a> {
    /// The token held by the session store, if any
    Session,
    /// No header (login and registration)
    Anonymous,
    /// A specific token, regardless of the session
    Token(&'a str),
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

/// Perform one request and return the raw body of a successful response
pub async fn send<B: Serialize + ?Sized>(
    method: Method,
    path: &str,
    body: Option<&B>,
    credential: Credential<'_>,
) -> Result<String, ApiError> {
    let mut request = builder(method, &api_url(path)).header("Content-Type", "application/json");

    let token = match credential {
        Credential::Session => storage::get_token(),
        Credential::Token(token) => Some(token.to_string()),
        Credential::Anonymous => None,
    };
    if let Some(token) = token {
        // The auth service expects the bare token, without a "Bearer" prefix
        request = request.header(AUTHORIZATION, &token);
    }

    let response = match body {
        Some(body) => {
            request
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
        }
        None => request.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    read_body(method, path, response).await
}

async fn read_body(method: Method, path: &str, response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response.text().await;
    classify(method, path, status, response.ok(), text.map_err(|e| e.to_string()))
}

/// Turn a status and the outcome of reading the body into the call's result
///
/// An error status is reported from whatever body could be read. A success
/// whose body could not be read is a transport failure, not a decode one.
fn classify(
    method: Method,
    path: &str,
    status: u16,
    ok: bool,
    body: Result<String, String>,
) -> Result<String, ApiError> {
    if !ok {
        let err = ApiError::from_response(status, body.as_deref().unwrap_or_default());
        log::error!("{:?} {} failed with {}: {}", method, path, status, err);
        return Err(err);
    }
    body.map_err(|e| {
        log::error!("{:?} {}: could not read response body: {}", method, path, e);
        ApiError::Network(e)
    })
}

/// Decode a JSON response body
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let text = send::<()>(Method::Get, path, None, Credential::Session).await?;
    decode(&text)
}

pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let text = send(Method::Post, path, Some(body), Credential::Session).await?;
    decode(&text)
}

/// `POST` whose response body is only an acknowledgement
pub async fn post_unit<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Post, path, Some(body), Credential::Session).await?;
    Ok(())
}

pub async fn put_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Put, path, Some(body), Credential::Session).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send::<()>(Method::Delete, path, None, Credential::Session).await?;
    Ok(())
}

pub async fn delete_with_body<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Delete, path, Some(body), Credential::Session).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::Product;

    #[test]
    fn test_decode_product_list() {
        let body = r#"[{"id": 1, "name": "Tea", "description": "Green", "price": 35000, "quantity": 4}]"#;
        let products: Vec<Product> = decode(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Tea");
        assert_eq!(products[0].quantity, 4);
    }

    #[test]
    fn test_unreadable_success_body_is_a_network_error() {
        let err = classify(Method::Get, "/products", 200, true, Err("stream aborted".into()))
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(ref msg) if msg == "stream aborted"));
    }

    #[test]
    fn test_error_status_uses_readable_body() {
        let body = Ok(r#"{"error": "Out of stock"}"#.to_string());
        let err = classify(Method::Put, "/products/1", 400, false, body).unwrap_err();
        assert_eq!(err.to_string(), "Out of stock");

        let err = classify(Method::Put, "/products/1", 500, false, Err("gone".into())).unwrap_err();
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn test_decode_failure_is_a_decode_error() {
        let err = decode::<Vec<Product>>("<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
