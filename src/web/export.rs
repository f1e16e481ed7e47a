use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::application::{AppError, ExpenseService};
use crate::io::export::Exporter;

pub async fn csv(State(service): State<ExpenseService>) -> Result<Response, AppError> {
    let mut out = Vec::new();
    Exporter::new(&service).export_balances_csv(&mut out).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"expenses.csv\""),
        ],
        out,
    )
        .into_response())
}

pub async fn json(State(service): State<ExpenseService>) -> Result<Response, AppError> {
    let mut out = Vec::new();
    Exporter::new(&service).export_balances_json(&mut out).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"expenses.json\""),
        ],
        out,
    )
        .into_response())
}
