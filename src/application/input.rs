use std::fmt;

use crate::domain::{parse_cents, Cents};

use super::AppError;

/// A validated category/amount pair, ready to hit the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub category: String,
    pub amount: Cents,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: Cents) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Parse raw submitted values. The category is trimmed and must not be
    /// empty; the amount must be a plain decimal number.
    pub fn parse(category: &str, amount: &str) -> Result<Self, AppError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::InvalidInput("category must not be empty".into()));
        }

        let amount = parse_cents(amount).map_err(|e| {
            AppError::InvalidInput(format!("amount '{}': {}", amount.trim(), e))
        })?;

        Ok(Self::new(category, amount))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "Add",
            Action::Remove => "Remove",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("add") => Ok(Action::Add),
            s if s.eq_ignore_ascii_case("remove") => Ok(Action::Remove),
            other => Err(AppError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the form page submits: an action plus the expense it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseCommand {
    pub action: Action,
    pub expense: Expense,
}

impl ExpenseCommand {
    pub fn parse(category: &str, amount: &str, action: &str) -> Result<Self, AppError> {
        let action = Action::parse(action)?;
        let expense = Expense::parse(category, amount)?;
        Ok(Self { action, expense })
    }
}
