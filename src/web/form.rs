use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use tracing::warn;

use crate::application::{ExpenseCommand, ExpenseService};

use super::html::{index_page, Notice};

/// Raw form fields. Missing fields arrive as empty strings and are rejected
/// by the parser rather than by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub action: String,
}

pub async fn index(State(service): State<ExpenseService>) -> Html<String> {
    Html(index_page(&service.summary().await, None))
}

pub async fn submit(
    State(service): State<ExpenseService>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let command = match ExpenseCommand::parse(&form.category, &form.amount, &form.action) {
        Ok(command) => command,
        Err(err) => {
            warn!(error = %err, "invalid form submission");
            let notice = Notice::Error(err.to_string());
            let page = index_page(&service.summary().await, Some(&notice));
            return (StatusCode::BAD_REQUEST, Html(page)).into_response();
        }
    };

    let outcome = service.apply(command).await;
    let notice = Notice::Info(outcome.message());
    Html(index_page(&service.summary().await, Some(&notice))).into_response()
}
