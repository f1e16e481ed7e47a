use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown action: {0} (expected Add or Remove)")]
    UnknownAction(String),

    #[error("Export failed: {0}")]
    Export(#[from] anyhow::Error),
}

impl AppError {
    /// True for errors caused by what the user submitted.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_) | AppError::UnknownAction(_))
    }
}
