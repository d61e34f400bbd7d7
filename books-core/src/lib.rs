//! TradeBooks Core
//!
//! Append-only double-entry general ledger with derived KPI aggregation for
//! a trading business.
//!
//! # Architecture
//!
//! - **Double Entry**: journals post only when debits equal credits
//! - **Single Writer**: one actor task owns every store, so mutations never interleave
//! - **Derived Metrics**: KPIs are recomputed from the full ledger on demand, never cached
//! - **Append Only**: posted entries are never modified or deleted
//!
//! # Invariants
//!
//! - Posted journals balance: |Σ(debits) − Σ(credits)| < 0.01
//! - Stock valuation: total_value == quantity × unit_cost after every mutation
//! - Atomic cascades: an order and its journal are one observable unit
//! - Failed operations leave state unchanged

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod actor;
pub mod aggregate;
pub mod books;
pub mod config;
pub mod error;
pub mod metrics;
pub mod orders;
pub mod posting;
pub mod seed;
pub mod store;
pub mod types;

// Re-exports
pub use aggregate::MetricsSnapshot;
pub use books::Books;
pub use config::Config;
pub use error::{Error, Result};
pub use seed::SeedData;
pub use types::{
    Account, AccountCategory, JournalLine, LedgerEntry, PurchaseOrder, PurchaseOrderStatus,
    SalesOrder, SalesOrderStatus, StockItem, ValuationMethod,
};
