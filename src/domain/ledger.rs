use std::fmt;

use serde::{Deserialize, Serialize};

use super::{format_dollars, Cents};

/// Running total for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBalance {
    pub category: String,
    pub amount: Cents,
}

/// In-memory category -> balance mapping.
///
/// Categories are case-sensitive and kept in insertion order. A category that
/// is removed and added again goes to the end.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balances: Vec<CategoryBalance>,
}

/// Outcome of a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The category had no balance; nothing changed.
    NotFound { category: String },
    /// The balance was reduced and the category is still present.
    Decremented {
        category: String,
        amount: Cents,
        remaining: Cents,
    },
    /// The removal covered the whole balance; the category is gone.
    Deleted { category: String, amount: Cents },
}

impl Removal {
    pub fn is_found(&self) -> bool {
        !matches!(self, Removal::NotFound { .. })
    }

    /// Human-readable status shown after a removal.
    pub fn message(&self) -> String {
        match self {
            Removal::NotFound { .. } => "Category not found.".to_string(),
            Removal::Decremented {
                category, amount, ..
            }
            | Removal::Deleted { category, amount } => {
                format!("{} removed from {}", format_dollars(*amount), category)
            }
        }
    }
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.balances.iter().position(|b| b.category == category)
    }

    /// Add `amount` to `category`, creating it if needed.
    pub fn add(&mut self, category: &str, amount: Cents) {
        match self.position(category) {
            Some(idx) => {
                let entry = &mut self.balances[idx];
                entry.amount = entry.amount.saturating_add(amount);
            }
            None => self.balances.push(CategoryBalance {
                category: category.to_string(),
                amount,
            }),
        }
    }

    /// Remove `amount` from `category`.
    ///
    /// If `amount` is at least the current balance the category is deleted;
    /// any excess is discarded.
    pub fn remove(&mut self, category: &str, amount: Cents) -> Removal {
        let Some(idx) = self.position(category) else {
            return Removal::NotFound {
                category: category.to_string(),
            };
        };

        let current = self.balances[idx].amount;
        if amount >= current {
            let entry = self.balances.remove(idx);
            Removal::Deleted {
                category: entry.category,
                amount,
            }
        } else {
            let entry = &mut self.balances[idx];
            entry.amount = current.saturating_sub(amount);
            Removal::Decremented {
                category: entry.category.clone(),
                amount,
                remaining: entry.amount,
            }
        }
    }

    pub fn balance(&self, category: &str) -> Option<Cents> {
        self.position(category).map(|idx| self.balances[idx].amount)
    }

    /// Sum of all current balances.
    pub fn total(&self) -> Cents {
        self.balances
            .iter()
            .fold(0, |total: Cents, b| total.saturating_add(b.amount))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryBalance> {
        self.balances.iter()
    }

    /// Snapshot of every line plus a freshly computed total.
    pub fn summarize(&self) -> Summary {
        Summary {
            lines: self.balances.clone(),
            total: self.total(),
        }
    }
}

/// Point-in-time rendering of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub lines: Vec<CategoryBalance>,
    pub total: Cents,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expense Tracker:")?;
        for line in &self.lines {
            writeln!(f, "{}: {}", line.category, format_dollars(line.amount))?;
        }
        writeln!(f, "Total: {}", format_dollars(self.total))
    }
}
