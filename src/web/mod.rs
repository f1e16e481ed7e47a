//! HTTP surfaces over the shared [`ExpenseService`]: the form page at `/`,
//! the dashboard under `/dashboard/`, and balance exports.

mod dashboard;
mod error;
mod export;
mod form;
pub mod html;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::ExpenseService;

pub use dashboard::{DashboardForm, DashboardJson, DashboardUpdate};
pub use error::ErrorBody;
pub use form::ExpenseForm;

/// Build the application router around a single shared service.
pub fn router(service: ExpenseService) -> Router {
    Router::new()
        .route("/", get(form::index).post(form::submit))
        .route("/dashboard", get(dashboard::page))
        .route("/dashboard/", get(dashboard::page))
        .route("/dashboard/data", get(dashboard::data))
        .route("/dashboard/add", post(dashboard::add))
        .route("/dashboard/remove", post(dashboard::remove))
        .route("/export.csv", get(export::csv))
        .route("/export.json", get(export::json))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, service: ExpenseService) -> Result<()> {
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!(%addr, "expense tracker listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
