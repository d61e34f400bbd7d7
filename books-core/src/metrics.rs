//! Operation counters for observability
//!
//! Prometheus counters over the book's write surface. Counters live on a
//! dedicated registry so multiple instances can coexist in one process.
//!
//! # Metrics
//!
//! - `books_journals_posted_total` - journals committed to the ledger
//! - `books_entries_appended_total` - ledger entries appended
//! - `books_unbalanced_rejected_total` - journals rejected by the balance check
//! - `books_sales_orders_total` - sales orders created
//! - `books_purchase_orders_total` - purchase orders created
//! - `books_stock_adjustments_total` - stock quantity adjustments

use prometheus::{IntCounter, Registry};
use std::fmt;
use std::sync::Arc;

/// Metrics collector
#[derive(Clone)]
pub struct Metrics {
    /// Journals committed
    pub journals_posted: IntCounter,

    /// Ledger entries appended
    pub entries_appended: IntCounter,

    /// Journals rejected as unbalanced
    pub unbalanced_rejected: IntCounter,

    /// Sales orders created
    pub sales_orders: IntCounter,

    /// Purchase orders created
    pub purchase_orders: IntCounter,

    /// Stock adjustments applied
    pub stock_adjustments: IntCounter,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl Metrics {
    /// Create a new metrics collector with its own registry.
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let journals_posted = IntCounter::new(
            "books_journals_posted_total",
            "Journals committed to the ledger",
        )?;
        registry.register(Box::new(journals_posted.clone()))?;

        let entries_appended = IntCounter::new(
            "books_entries_appended_total",
            "Ledger entries appended",
        )?;
        registry.register(Box::new(entries_appended.clone()))?;

        let unbalanced_rejected = IntCounter::new(
            "books_unbalanced_rejected_total",
            "Journals rejected by the balance check",
        )?;
        registry.register(Box::new(unbalanced_rejected.clone()))?;

        let sales_orders = IntCounter::new(
            "books_sales_orders_total",
            "Sales orders created",
        )?;
        registry.register(Box::new(sales_orders.clone()))?;

        let purchase_orders = IntCounter::new(
            "books_purchase_orders_total",
            "Purchase orders created",
        )?;
        registry.register(Box::new(purchase_orders.clone()))?;

        let stock_adjustments = IntCounter::new(
            "books_stock_adjustments_total",
            "Stock quantity adjustments",
        )?;
        registry.register(Box::new(stock_adjustments.clone()))?;

        Ok(Self {
            journals_posted,
            entries_appended,
            unbalanced_rejected,
            sales_orders,
            purchase_orders,
            stock_adjustments,
            registry,
        })
    }

    /// Record a committed journal of `entry_count` lines.
    pub fn record_journal_posted(&self, entry_count: usize) {
        self.journals_posted.inc();
        self.entries_appended.inc_by(entry_count as u64);
    }

    /// Record a journal rejected as unbalanced.
    pub fn record_unbalanced_rejection(&self) {
        self.unbalanced_rejected.inc();
    }

    /// Record a created sales order.
    pub fn record_sales_order(&self) {
        self.sales_orders.inc();
    }

    /// Record a created purchase order.
    pub fn record_purchase_order(&self) {
        self.purchase_orders.inc();
    }

    /// Record a stock adjustment.
    pub fn record_stock_adjustment(&self) {
        self.stock_adjustments.inc();
    }

    /// Get the metrics registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("journals_posted", &self.journals_posted.get())
            .field("entries_appended", &self.entries_appended.get())
            .field("unbalanced_rejected", &self.unbalanced_rejected.get())
            .field("sales_orders", &self.sales_orders.get())
            .field("purchase_orders", &self.purchase_orders.get())
            .field("stock_adjustments", &self.stock_adjustments.get())
            .finish()
    }
}
