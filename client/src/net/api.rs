//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use items::{Item, ItemInput};
use uuid::Uuid;

#[cfg(any(test, feature = "hydrate"))]
const ITEMS_ENDPOINT: &str = "/api/items";

#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(id: Uuid) -> String {
    format!("/api/items/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16) -> String {
    format!("list items failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_failed_message(status: u16) -> String {
    format!("create item failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_failed_message(status: u16) -> String {
    format!("update item failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_failed_message(status: u16) -> String {
    format!("delete item failed: {status}")
}

/// Fetch the full item list from `GET /api/items`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_items() -> Result<Vec<Item>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ITEMS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<Vec<Item>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create an item via `POST /api/items`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-created status.
pub async fn create_item(input: &ItemInput) -> Result<Item, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ITEMS_ENDPOINT)
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_failed_message(resp.status()));
        }
        resp.json::<Item>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}

/// Update an item via `PUT /api/items/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn update_item(id: Uuid, input: &ItemInput) -> Result<Item, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = item_endpoint(id);
        let resp = gloo_net::http::Request::put(&url)
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(update_failed_message(resp.status()));
        }
        resp.json::<Item>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        Err("not available on server".to_owned())
    }
}

/// Delete an item via `DELETE /api/items/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_item(id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = item_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(delete_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
