use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::{format_dollars, CategoryBalance, Ledger, Removal, Summary};

use super::{Action, DashboardReport, Expense, ExpenseCommand};

/// Application service providing high-level operations on the expense ledger.
/// This is the only way the form page, the dashboard and the exports touch
/// the ledger.
///
/// Cloning is cheap and every clone shares the same ledger. Each mutation
/// holds the write lock for its whole read-modify-write.
#[derive(Debug, Clone, Default)]
pub struct ExpenseService {
    ledger: Arc<RwLock<Ledger>>,
}

/// Result of applying an [`ExpenseCommand`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Expense),
    Removed(Removal),
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Added(expense) => format!(
                "{} added to {}",
                format_dollars(expense.amount),
                expense.category
            ),
            Outcome::Removed(removal) => removal.message(),
        }
    }
}

impl ExpenseService {
    /// Create a service over a fresh, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing ledger.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Add an expense to its category.
    pub async fn add_expense(&self, expense: &Expense) {
        let mut ledger = self.ledger.write().await;
        ledger.add(&expense.category, expense.amount);
        info!(
            category = %expense.category,
            amount = expense.amount,
            balance = ledger.balance(&expense.category),
            "expense added"
        );
    }

    /// Remove an expense from its category.
    pub async fn remove_expense(&self, expense: &Expense) -> Removal {
        let mut ledger = self.ledger.write().await;
        let removal = ledger.remove(&expense.category, expense.amount);
        match &removal {
            Removal::NotFound { category } => {
                info!(category = %category, "removal skipped: category not found");
            }
            Removal::Decremented {
                category,
                amount,
                remaining,
            } => {
                info!(category = %category, amount, remaining, "expense removed");
            }
            Removal::Deleted { category, amount } => {
                info!(category = %category, amount, "expense removed, category cleared");
            }
        }
        removal
    }

    /// Apply a parsed form command.
    pub async fn apply(&self, command: ExpenseCommand) -> Outcome {
        debug!(action = %command.action, category = %command.expense.category, "applying command");
        match command.action {
            Action::Add => {
                self.add_expense(&command.expense).await;
                Outcome::Added(command.expense)
            }
            Action::Remove => Outcome::Removed(self.remove_expense(&command.expense).await),
        }
    }

    // ========================
    // Queries
    // ========================

    /// Summary lines in insertion order plus the current total.
    pub async fn summary(&self) -> Summary {
        self.ledger.read().await.summarize()
    }

    /// Current balances in insertion order.
    pub async fn balances(&self) -> Vec<CategoryBalance> {
        self.ledger.read().await.iter().cloned().collect()
    }

    /// Chart, total and table for the dashboard, from a single snapshot.
    pub async fn dashboard(&self) -> DashboardReport {
        DashboardReport::from_summary(&self.summary().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_ledger() {
        let service = ExpenseService::new();
        let other = service.clone();

        service.add_expense(&Expense::new("Food", 1000)).await;
        other.add_expense(&Expense::new("Food", 500)).await;

        let summary = service.summary().await;
        assert_eq!(summary.total, 1500);
        assert_eq!(summary.lines.len(), 1);
    }

    #[tokio::test]
    async fn test_apply_remove_reports_message() {
        let mut ledger = Ledger::new();
        ledger.add("Food", 1500);
        let service = ExpenseService::with_ledger(ledger);

        let outcome = service
            .apply(ExpenseCommand {
                action: Action::Remove,
                expense: Expense::new("Food", 500),
            })
            .await;

        assert_eq!(outcome.message(), "$5.00 removed from Food");
        assert_eq!(service.balances().await[0].amount, 1000);
    }

    #[tokio::test]
    async fn test_apply_add_reports_message() {
        let service = ExpenseService::new();

        let outcome = service
            .apply(ExpenseCommand {
                action: Action::Add,
                expense: Expense::new("Rent", 90_000),
            })
            .await;

        assert_eq!(outcome.message(), "$900.00 added to Rent");
    }
}
