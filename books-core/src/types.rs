//! Core types for the books
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money)
//! - Explicit account classification (no string-prefix parsing downstream)
//! - Serde round-tripping (seed files, snapshots)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Account classification used by the KPI aggregation.
///
/// Assigned once when an [`Account`] is constructed, from the leading digits
/// of its code. Cash is split out from other assets because cash-on-hand is
/// tracked as its own KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountCategory {
    /// Cash accounts (`1100` range)
    Cash,
    /// Other assets (`1xxx`)
    Asset,
    /// Liabilities, accounts payable (`2xxx`)
    Liability,
    /// Equity (`3xxx`)
    Equity,
    /// Revenue (`4xxx`)
    Revenue,
    /// Expenses and cost of goods sold (`5xxx`)
    Expense,
    /// Anything outside the conventional code ranges
    Other,
}

impl AccountCategory {
    /// Classify an account code by its conventional leading digits.
    pub fn classify(code: &str) -> Self {
        if code.starts_with("1100") {
            return AccountCategory::Cash;
        }
        match code.chars().next() {
            Some('1') => AccountCategory::Asset,
            Some('2') => AccountCategory::Liability,
            Some('3') => AccountCategory::Equity,
            Some('4') => AccountCategory::Revenue,
            Some('5') => AccountCategory::Expense,
            _ => AccountCategory::Other,
        }
    }
}

/// A chart-of-accounts entry carried on every ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Account code, e.g. `"1100"`
    pub code: String,

    /// Human-readable name, e.g. `"Cash at Bank"`
    pub name: String,

    /// Classification derived from the code at construction time
    pub category: AccountCategory,
}

impl Account {
    /// Create an account, classifying it from its code.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        let code = code.into();
        let category = AccountCategory::classify(&code);
        Self {
            code,
            name: name.into(),
            category,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// One posted, immutable line in the general ledger.
///
/// Created only by the posting path; never mutated or deleted afterwards.
/// A single line is not required to be one-sided -- balance is enforced at
/// the journal level, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique entry ID (UUIDv7 for time-ordering)
    pub id: Uuid,

    /// Posting date
    pub date: NaiveDate,

    /// Free-text grouping key, e.g. an order or invoice number
    pub reference: String,

    /// Account this line posts against
    pub account: Account,

    /// Line description
    pub description: String,

    /// Debit amount (non-negative)
    pub debit: Decimal,

    /// Credit amount (non-negative)
    pub credit: Decimal,
}

/// One unvalidated line of a journal, submitted for posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Account to post against
    pub account: Account,

    /// Line description
    pub description: String,

    /// Debit amount
    pub debit: Decimal,

    /// Credit amount
    pub credit: Decimal,
}

impl JournalLine {
    /// Debit-side line for `amount`.
    pub fn debit(account: Account, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account,
            description: description.into(),
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// Credit-side line for `amount`.
    pub fn credit(account: Account, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account,
            description: description.into(),
            debit: Decimal::ZERO,
            credit: amount,
        }
    }
}

/// Intended costing convention for a stock item.
///
/// Stored per item as a tag; the core does not track lot-level cost layers,
/// so valuation is always `quantity * unit_cost` regardless of method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValuationMethod {
    /// First in, first out
    Fifo,
    /// Last in, first out
    Lifo,
    /// Weighted average cost
    Avco,
}

/// A warehouse stock item with derived total value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Item identifier
    pub id: String,

    /// Stock-keeping unit code
    pub sku: String,

    /// Item name
    pub name: String,

    /// Warehouse holding the stock
    pub warehouse: String,

    /// On-hand quantity (non-negative)
    pub quantity: i64,

    /// Cost per unit (non-negative)
    pub unit_cost: Decimal,

    /// Derived: always `quantity * unit_cost`
    pub total_value: Decimal,

    /// Costing convention tag
    pub valuation_method: ValuationMethod,
}

impl StockItem {
    /// Create a stock item, deriving its total value.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        warehouse: impl Into<String>,
        quantity: i64,
        unit_cost: Decimal,
        valuation_method: ValuationMethod,
    ) -> Self {
        Self {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            warehouse: warehouse.into(),
            quantity,
            unit_cost,
            total_value: Decimal::from(quantity) * unit_cost,
            valuation_method,
        }
    }

    /// Set the quantity, recomputing the derived total value.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.total_value = Decimal::from(quantity) * self.unit_cost;
    }
}

/// Sales order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesOrderStatus {
    /// Just created
    New,
    /// Invoiced, payment outstanding
    AwaitingPayment,
    /// Goods in transit
    Shipping,
    /// Fully paid
    Paid,
}

/// A customer sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    /// Sequential identifier, `SO-<year>-<seq>`
    pub id: String,

    /// Customer name
    pub customer: String,

    /// Order date
    pub date: NaiveDate,

    /// Order total (strictly positive)
    pub total: Decimal,

    /// Lifecycle status
    pub status: SalesOrderStatus,
}

/// Purchase order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    /// Raised, waiting on approval
    PendingApproval,
    /// Sent to the vendor
    Ordered,
    /// Goods received
    Received,
}

/// A vendor purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Sequential identifier, `PO-<year>-<seq>`
    pub id: String,

    /// Vendor name
    pub vendor: String,

    /// Order date
    pub date: NaiveDate,

    /// Order total (strictly positive)
    pub total: Decimal,

    /// Lifecycle status
    pub status: PurchaseOrderStatus,
}
