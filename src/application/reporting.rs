use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{format_dollars, CategoryBalance, Cents, Summary};

pub const CHART_TITLE: &str = "Expense Breakdown";
pub const CHART_X_LABEL: &str = "Categories";
pub const CHART_Y_LABEL: &str = "Amount";

/// Everything the dashboard shows, derived from one ledger snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub chart: BarChart,
    pub total: Cents,
    pub total_label: String,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub category: String,
    pub amount: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub category: String,
    pub amount: Cents,
    pub formatted: String,
}

impl DashboardReport {
    pub fn from_summary(summary: &Summary) -> Self {
        let bars = summary
            .lines
            .iter()
            .map(|line| Bar {
                category: line.category.clone(),
                amount: line.amount,
            })
            .collect();

        let rows = summary
            .lines
            .iter()
            .map(|line| TableRow {
                category: line.category.clone(),
                amount: line.amount,
                formatted: format_dollars(line.amount),
            })
            .collect();

        Self {
            chart: BarChart {
                title: CHART_TITLE.to_string(),
                x_label: CHART_X_LABEL.to_string(),
                y_label: CHART_Y_LABEL.to_string(),
                bars,
            },
            total: summary.total,
            total_label: format!("Total Expense: {}", format_dollars(summary.total)),
            rows,
        }
    }

    /// Largest bar, used to scale the chart. Zero when there is nothing to draw.
    pub fn max_amount(&self) -> Cents {
        self.chart
            .bars
            .iter()
            .map(|b| b.amount)
            .max()
            .unwrap_or(0)
    }
}

/// Snapshot written by the JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancesSnapshot {
    pub exported_at: DateTime<Utc>,
    pub balances: Vec<CategoryBalance>,
    pub total: Cents,
}

impl BalancesSnapshot {
    pub fn new(summary: Summary, exported_at: DateTime<Utc>) -> Self {
        Self {
            exported_at,
            balances: summary.lines,
            total: summary.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ledger;

    #[test]
    fn test_dashboard_from_empty_summary() {
        let report = DashboardReport::from_summary(&Ledger::new().summarize());

        assert!(report.chart.bars.is_empty());
        assert!(report.rows.is_empty());
        assert_eq!(report.total, 0);
        assert_eq!(report.total_label, "Total Expense: $0.00");
        assert_eq!(report.max_amount(), 0);
    }

    #[test]
    fn test_dashboard_mirrors_ledger() {
        let mut ledger = Ledger::new();
        ledger.add("Food", 2500);
        ledger.add("Rent", 90_000);

        let report = DashboardReport::from_summary(&ledger.summarize());

        assert_eq!(report.chart.title, CHART_TITLE);
        assert_eq!(report.chart.bars.len(), 2);
        assert_eq!(report.chart.bars[0].category, "Food");
        assert_eq!(report.rows[1].formatted, "$900.00");
        assert_eq!(report.total, 92_500);
        assert_eq!(report.total_label, "Total Expense: $925.00");
        assert_eq!(report.max_amount(), 90_000);
    }
}
