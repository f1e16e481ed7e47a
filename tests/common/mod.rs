// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use expenses::application::{Expense, ExpenseService};
use expenses::web;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Helper to create a router over a fresh service, keeping a handle on the
/// service so tests can inspect the ledger directly.
pub fn test_app() -> (Router, ExpenseService) {
    let service = ExpenseService::new();
    (web::router(service.clone()), service)
}

/// Send a request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> Result<Response<Body>> {
    Ok(app.clone().oneshot(request).await?)
}

pub async fn get(app: &Router, uri: &str) -> Result<(StatusCode, String)> {
    let request = Request::builder().uri(uri).body(Body::empty())?;
    let response = send(app, request).await?;
    let status = response.status();
    Ok((status, body_string(response).await?))
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Result<(StatusCode, String)> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))?;
    let response = send(app, request).await?;
    let status = response.status();
    Ok((status, body_string(response).await?))
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?;
    let response = send(app, request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, serde_json::from_slice(&bytes)?))
}

pub async fn body_string(response: Response<Body>) -> Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Test fixture: a few categories with known balances
pub struct StandardExpenses;

impl StandardExpenses {
    /// Food = 15.00, Rent = 900.00, Fun = 2.50, in that order
    pub async fn create(service: &ExpenseService) {
        service.add_expense(&Expense::new("Food", 1000)).await;
        service.add_expense(&Expense::new("Rent", 90_000)).await;
        service.add_expense(&Expense::new("Food", 500)).await;
        service.add_expense(&Expense::new("Fun", 250)).await;
    }
}
