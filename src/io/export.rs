use anyhow::Result;
use chrono::Utc;
use std::io::Write;

use crate::application::{BalancesSnapshot, ExpenseService};
use crate::domain::format_cents;

/// Exporter for converting the current balances to downloadable formats
pub struct Exporter<'a> {
    service: &'a ExpenseService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a ExpenseService) -> Self {
        Self { service }
    }

    /// Export balances to CSV format, one row per category in ledger order.
    pub async fn export_balances_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let balances = self.service.balances().await;
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["category", "amount_cents", "amount"])?;

        let mut count = 0;
        for balance in &balances {
            let amount_cents = balance.amount.to_string();
            let amount = format_cents(balance.amount);
            csv_writer.write_record([
                balance.category.as_str(),
                amount_cents.as_str(),
                amount.as_str(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export balances and total as a JSON snapshot
    pub async fn export_balances_json<W: Write>(&self, mut writer: W) -> Result<BalancesSnapshot> {
        let snapshot = BalancesSnapshot::new(self.service.summary().await, Utc::now());

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Expense;

    #[tokio::test]
    async fn test_export_balances_csv() {
        let service = ExpenseService::new();
        service.add_expense(&Expense::new("Food", 1550)).await;
        service.add_expense(&Expense::new("Rent, flat", 90_000)).await;

        let mut out = Vec::new();
        let count = Exporter::new(&service)
            .export_balances_csv(&mut out)
            .await
            .unwrap();

        assert_eq!(count, 2);
        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv,
            "category,amount_cents,amount\nFood,1550,15.50\n\"Rent, flat\",90000,900.00\n"
        );
    }

    #[tokio::test]
    async fn test_export_balances_json() {
        let service = ExpenseService::new();
        service.add_expense(&Expense::new("Food", 1550)).await;

        let mut out = Vec::new();
        let snapshot = Exporter::new(&service)
            .export_balances_json(&mut out)
            .await
            .unwrap();

        assert_eq!(snapshot.total, 1550);
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["balances"][0]["category"], "Food");
        assert_eq!(parsed["total"], 1550);
    }
}
