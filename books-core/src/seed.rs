//! Initial data sets for opening the books
//!
//! The core consumes a [`SeedData`] at startup and nothing else; there is no
//! external persistence. `SeedData::default()` opens empty books,
//! [`SeedData::demo`] reproduces the furniture-trading demo data set, and
//! [`SeedData::from_file`] loads a JSON seed.

use crate::error::Result;
use crate::types::{
    Account, LedgerEntry, PurchaseOrder, PurchaseOrderStatus, SalesOrder, SalesOrderStatus,
    StockItem, ValuationMethod,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Initial ledger, inventory, and order state.
///
/// Lists are stored newest-first, matching how the stores keep them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    /// Seed ledger entries
    #[serde(default)]
    pub ledger: Vec<LedgerEntry>,

    /// Seed stock items
    #[serde(default)]
    pub inventory: Vec<StockItem>,

    /// Seed sales orders
    #[serde(default)]
    pub sales_orders: Vec<SalesOrder>,

    /// Seed purchase orders
    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,
}

impl SeedData {
    /// The furniture-trading demo book: an opening cash balance, one paid
    /// invoice, three stock items, and one order on each side.
    pub fn demo() -> Self {
        let opening_date = NaiveDate::from_ymd_opt(2024, 10, 24).expect("valid calendar date");
        let po_date = NaiveDate::from_ymd_opt(2024, 10, 20).expect("valid calendar date");

        let cash = Account::new("1100", "Cash at Bank");
        let revenue = Account::new("4000", "Sales Revenue");

        let ledger = vec![
            LedgerEntry {
                id: Uuid::now_v7(),
                date: opening_date,
                reference: "OPENING-BAL".to_string(),
                account: cash.clone(),
                description: "Opening balance".to_string(),
                debit: Decimal::from(500_000_000i64),
                credit: Decimal::ZERO,
            },
            LedgerEntry {
                id: Uuid::now_v7(),
                date: opening_date,
                reference: "INV-2024-001".to_string(),
                account: cash,
                description: "Sales receipt".to_string(),
                debit: Decimal::from(15_400_000i64),
                credit: Decimal::ZERO,
            },
            LedgerEntry {
                id: Uuid::now_v7(),
                date: opening_date,
                reference: "INV-2024-001".to_string(),
                account: revenue,
                description: "Sales receipt".to_string(),
                debit: Decimal::ZERO,
                credit: Decimal::from(15_400_000i64),
            },
        ];

        let inventory = vec![
            StockItem::new(
                "1",
                "LUX-CH-001",
                "Eames Lounge Chair",
                "WH-Main-01",
                15,
                Decimal::new(85000, 2),
                ValuationMethod::Fifo,
            ),
            StockItem::new(
                "2",
                "LUX-CH-002",
                "Eames Ottoman",
                "WH-Main-01",
                12,
                Decimal::new(22000, 2),
                ValuationMethod::Fifo,
            ),
            StockItem::new(
                "3",
                "TC-DL-882",
                "Marble Dining Table",
                "WH-East-02",
                4,
                Decimal::new(140000, 2),
                ValuationMethod::Avco,
            ),
        ];

        let sales_orders = vec![SalesOrder {
            id: "SO-2024-001".to_string(),
            customer: "Makmur Jaya Trading".to_string(),
            date: opening_date,
            total: Decimal::from(15_400_000i64),
            status: SalesOrderStatus::Paid,
        }];

        let purchase_orders = vec![PurchaseOrder {
            id: "PO-2024-001".to_string(),
            vendor: "Teak Wood Distributors".to_string(),
            date: po_date,
            total: Decimal::from(55_000_000i64),
            status: PurchaseOrderStatus::Received,
        }];

        Self {
            ledger,
            inventory,
            sales_orders,
            purchase_orders,
        }
    }

    /// Load a seed data set from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed = serde_json::from_str(&content)?;
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting;
    use crate::types::JournalLine;

    #[test]
    fn test_demo_seed_shape() {
        let seed = SeedData::demo();
        assert_eq!(seed.ledger.len(), 3);
        assert_eq!(seed.inventory.len(), 3);
        assert_eq!(seed.sales_orders.len(), 1);
        assert_eq!(seed.purchase_orders.len(), 1);

        // Every stock item carries its derived value
        for item in &seed.inventory {
            assert_eq!(item.total_value, Decimal::from(item.quantity) * item.unit_cost);
        }
    }

    #[test]
    fn test_demo_invoice_pair_is_balanced() {
        let seed = SeedData::demo();
        let lines: Vec<JournalLine> = seed
            .ledger
            .iter()
            .filter(|entry| entry.reference == "INV-2024-001")
            .map(|entry| JournalLine {
                account: entry.account.clone(),
                description: entry.description.clone(),
                debit: entry.debit,
                credit: entry.credit,
            })
            .collect();

        assert_eq!(lines.len(), 2);
        assert!(posting::validate(&lines).is_ok());
    }

    #[test]
    fn test_seed_round_trips_through_json() {
        let seed = SeedData::demo();
        let json = serde_json::to_string(&seed).unwrap();
        let restored: SeedData = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.ledger.len(), seed.ledger.len());
        assert_eq!(restored.inventory, seed.inventory);
        assert_eq!(restored.sales_orders, seed.sales_orders);
    }
}
