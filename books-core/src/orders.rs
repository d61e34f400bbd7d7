//! Order numbering and the automatic journal cascade
//!
//! Creating an order always synthesizes a fixed two-line journal referenced
//! by the new order's identifier:
//!
//! - Sales: debit Accounts Receivable, credit Sales Revenue
//! - Purchase: debit Inventory, credit Accounts Payable
//!
//! Both lines carry the order total, so the journal is balanced by
//! construction whenever the total is strictly positive.

use crate::types::{Account, JournalLine, PurchaseOrder, SalesOrder};
use chrono::{Datelike, Utc};

/// Next sales order identifier, `SO-<year>-<3-digit-seq>`.
///
/// The sequence is the current list count + 2: seeded books start their
/// display numbering at 001, so the first created order is 002. Preserved
/// verbatim for compatibility with existing order references.
pub fn next_sales_order_id(existing: usize) -> String {
    format!("SO-{}-{:03}", Utc::now().year(), existing + 2)
}

/// Next purchase order identifier, `PO-<year>-<3-digit-seq>`.
///
/// Same count + 2 sequence rule as sales orders.
pub fn next_purchase_order_id(existing: usize) -> String {
    format!("PO-{}-{:03}", Utc::now().year(), existing + 2)
}

/// Journal for a sales order: bill the customer, recognize the revenue.
pub fn sales_journal(order: &SalesOrder) -> Vec<JournalLine> {
    vec![
        JournalLine::debit(
            Account::new("1200", "Accounts Receivable"),
            format!("Invoice {}", order.customer),
            order.total,
        ),
        JournalLine::credit(
            Account::new("4000", "Sales Revenue"),
            format!("Sale {}", order.id),
            order.total,
        ),
    ]
}

/// Journal for a purchase order: stock comes in, the vendor is owed.
pub fn purchase_journal(order: &PurchaseOrder) -> Vec<JournalLine> {
    vec![
        JournalLine::debit(
            Account::new("1400", "Inventory"),
            format!("Stock from {}", order.vendor),
            order.total,
        ),
        JournalLine::credit(
            Account::new("2000", "Accounts Payable"),
            format!("Bill {}", order.id),
            order.total,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting;
    use crate::types::{AccountCategory, PurchaseOrderStatus, SalesOrderStatus};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_order_id_sequence() {
        let year = Utc::now().year();
        assert_eq!(next_sales_order_id(0), format!("SO-{year}-002"));
        assert_eq!(next_sales_order_id(1), format!("SO-{year}-003"));
        assert_eq!(next_sales_order_id(2), format!("SO-{year}-004"));
        assert_eq!(next_purchase_order_id(0), format!("PO-{year}-002"));
        assert_eq!(next_purchase_order_id(99), format!("PO-{year}-101"));
    }

    #[test]
    fn test_sales_journal_balanced_and_classified() {
        let order = SalesOrder {
            id: "SO-2024-002".to_string(),
            customer: "Makmur Jaya Trading".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 25).unwrap(),
            total: Decimal::new(1540000000, 2),
            status: SalesOrderStatus::New,
        };

        let lines = sales_journal(&order);
        assert_eq!(lines.len(), 2);
        assert!(posting::validate(&lines).is_ok());
        assert_eq!(lines[0].account.category, AccountCategory::Asset);
        assert_eq!(lines[1].account.category, AccountCategory::Revenue);
        assert_eq!(lines[1].credit, order.total);
    }

    #[test]
    fn test_purchase_journal_balanced_and_classified() {
        let order = PurchaseOrder {
            id: "PO-2024-002".to_string(),
            vendor: "Teak Wood Distributors".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 25).unwrap(),
            total: Decimal::new(5500000000, 2),
            status: PurchaseOrderStatus::Ordered,
        };

        let lines = purchase_journal(&order);
        assert_eq!(lines.len(), 2);
        assert!(posting::validate(&lines).is_ok());
        assert_eq!(lines[0].account.category, AccountCategory::Asset);
        assert_eq!(lines[1].account.category, AccountCategory::Liability);
        assert_eq!(lines[0].debit, order.total);
    }

    #[test]
    fn test_non_positive_total_fails_validation() {
        let order = SalesOrder {
            id: "SO-2024-002".to_string(),
            customer: "Nobody".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 25).unwrap(),
            total: Decimal::ZERO,
            status: SalesOrderStatus::New,
        };

        // Balanced by construction, but a zero total is not postable
        assert!(posting::validate(&sales_journal(&order)).is_err());
    }
}
