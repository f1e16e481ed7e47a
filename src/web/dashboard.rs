use axum::extract::{FromRequest, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::application::{
    Action, AppError, DashboardReport, Expense, ExpenseCommand, ExpenseService,
};

use super::html::{dashboard_page, Notice};

/// Form body posted by the dashboard buttons.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String,
}

/// JSON body; `amount` may be a number or a decimal string.
#[derive(Debug, Deserialize)]
pub struct DashboardJson {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: Value,
}

impl DashboardJson {
    fn amount_text(&self) -> Result<String, AppError> {
        match &self.amount {
            Value::String(s) => Ok(s.clone()),
            // Floats are written out in full so that exponent notation never
            // reaches the decimal parser.
            Value::Number(n) => Ok(match n.as_f64() {
                Some(f) if n.is_f64() => f.to_string(),
                _ => n.to_string(),
            }),
            Value::Null => Err(AppError::InvalidInput("amount is required".into())),
            other => Err(AppError::InvalidInput(format!(
                "amount must be a number, got {}",
                other
            ))),
        }
    }
}

/// Response to a JSON add/remove: the status message and the refreshed view.
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardUpdate {
    pub message: String,
    pub report: DashboardReport,
}

pub async fn page(State(service): State<ExpenseService>) -> Html<String> {
    Html(dashboard_page(&service.dashboard().await, None))
}

pub async fn data(State(service): State<ExpenseService>) -> Json<DashboardReport> {
    Json(service.dashboard().await)
}

pub async fn add(State(service): State<ExpenseService>, request: Request) -> Response {
    update(service, Action::Add, request).await
}

pub async fn remove(State(service): State<ExpenseService>, request: Request) -> Response {
    update(service, Action::Remove, request).await
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

async fn update(service: ExpenseService, action: Action, request: Request) -> Response {
    if is_json(request.headers()) {
        match json_update(&service, action, request).await {
            Ok(update) => Json(update).into_response(),
            Err(err) => err.into_response(),
        }
    } else {
        match form_update(&service, action, request).await {
            Ok(message) => {
                let notice = Notice::Info(message);
                Html(dashboard_page(&service.dashboard().await, Some(&notice))).into_response()
            }
            Err(err) => {
                warn!(error = %err, "invalid dashboard submission");
                let notice = Notice::Error(err.to_string());
                let page = dashboard_page(&service.dashboard().await, Some(&notice));
                (StatusCode::BAD_REQUEST, Html(page)).into_response()
            }
        }
    }
}

async fn json_update(
    service: &ExpenseService,
    action: Action,
    request: Request,
) -> Result<DashboardUpdate, AppError> {
    let Json(body) = Json::<DashboardJson>::from_request(request, &())
        .await
        .map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let expense = Expense::parse(&body.category, &body.amount_text()?)?;

    let outcome = service.apply(ExpenseCommand { action, expense }).await;
    Ok(DashboardUpdate {
        message: outcome.message(),
        report: service.dashboard().await,
    })
}

async fn form_update(
    service: &ExpenseService,
    action: Action,
    request: Request,
) -> Result<String, AppError> {
    let Form(body) = Form::<DashboardForm>::from_request(request, &())
        .await
        .map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let expense = Expense::parse(&body.category, &body.amount)?;

    let outcome = service.apply(ExpenseCommand { action, expense }).await;
    Ok(outcome.message())
}
