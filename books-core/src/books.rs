//! Main bookkeeping orchestration layer
//!
//! This module ties together the stores, actor, and telemetry components
//! into a high-level API for posting, orders, stock, and KPI snapshots.
//!
//! # Example
//!
//! ```no_run
//! use books_core::{Books, Config, SeedData};
//!
//! #[tokio::main]
//! async fn main() -> books_core::Result<()> {
//!     let books = Books::open(Config::default(), SeedData::demo()).await?;
//!
//!     let snapshot = books.compute_metrics().await?;
//!     println!("net revenue: {}", snapshot.net_revenue);
//!
//!     books.shutdown().await?;
//!     Ok(())
//! }
//! ```

use crate::actor::{spawn_books_actor, BooksHandle};
use crate::aggregate::MetricsSnapshot;
use crate::error::{Error, Result};
use crate::metrics::Metrics;
use crate::seed::SeedData;
use crate::types::{
    JournalLine, LedgerEntry, PurchaseOrder, PurchaseOrderStatus, SalesOrder, SalesOrderStatus,
    StockItem,
};
use crate::Config;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Main bookkeeping interface
///
/// Owns the single-writer actor and the telemetry collector. Cheap to clone;
/// pass a clone to whichever component needs read or write access instead of
/// reaching for shared global state.
#[derive(Debug, Clone)]
pub struct Books {
    /// Actor handle for all state access
    handle: BooksHandle,

    /// Operation counters
    metrics: Metrics,

    /// Configuration
    config: Config,
}

impl Books {
    /// Open the books with configuration and an initial seed data set.
    pub async fn open(config: Config, seed: SeedData) -> Result<Self> {
        let metrics = Metrics::new()?;
        let handle = spawn_books_actor(seed, config.mailbox_capacity);

        tracing::info!(
            service = %config.service_name,
            version = %config.service_version,
            "books opened"
        );

        Ok(Self {
            handle,
            metrics,
            config,
        })
    }

    /// Validate and post a journal under the given reference.
    ///
    /// The whole batch commits as one unit or not at all; on an
    /// [`Error::Unbalanced`] rejection the ledger is untouched.
    pub async fn post(&self, lines: Vec<JournalLine>, reference: impl Into<String>) -> Result<()> {
        let reference = reference.into();
        let line_count = lines.len();

        match self.handle.post_journal(lines, reference.clone()).await {
            Ok(()) => {
                self.metrics.record_journal_posted(line_count);
                tracing::info!(%reference, lines = line_count, "journal posted");
                Ok(())
            }
            Err(err) => {
                if matches!(err, Error::Unbalanced { .. }) {
                    self.metrics.record_unbalanced_rejection();
                }
                tracing::warn!(%reference, error = %err, "journal rejected");
                Err(err)
            }
        }
    }

    /// Create a sales order; its two-line journal posts in the same step.
    ///
    /// Fails as [`Error::Unbalanced`] when `total` is not strictly positive,
    /// leaving no order and no entries behind.
    pub async fn add_sales_order(
        &self,
        customer: impl Into<String>,
        date: NaiveDate,
        total: Decimal,
        status: SalesOrderStatus,
    ) -> Result<SalesOrder> {
        let order = self
            .handle
            .add_sales_order(customer.into(), date, total, status)
            .await?;

        self.metrics.record_sales_order();
        self.metrics.record_journal_posted(2);
        tracing::info!(order_id = %order.id, %total, "sales order created");

        Ok(order)
    }

    /// Create a purchase order; its two-line journal posts in the same step.
    pub async fn add_purchase_order(
        &self,
        vendor: impl Into<String>,
        date: NaiveDate,
        total: Decimal,
        status: PurchaseOrderStatus,
    ) -> Result<PurchaseOrder> {
        let order = self
            .handle
            .add_purchase_order(vendor.into(), date, total, status)
            .await?;

        self.metrics.record_purchase_order();
        self.metrics.record_journal_posted(2);
        tracing::info!(order_id = %order.id, %total, "purchase order created");

        Ok(order)
    }

    /// Set a stock item's quantity, recomputing its total value.
    ///
    /// Administrative correction only; no ledger posting results.
    pub async fn update_stock(&self, item_id: impl Into<String>, new_quantity: i64) -> Result<()> {
        let item_id = item_id.into();
        self.handle.update_stock(item_id.clone(), new_quantity).await?;

        self.metrics.record_stock_adjustment();
        tracing::info!(%item_id, new_quantity, "stock updated");

        Ok(())
    }

    /// Recompute the KPI snapshot from the full current state.
    pub async fn compute_metrics(&self) -> Result<MetricsSnapshot> {
        self.handle.compute_metrics().await
    }

    /// All ledger entries, newest first.
    pub async fn ledger_entries(&self) -> Result<Vec<LedgerEntry>> {
        self.handle.ledger_entries().await
    }

    /// All stock items.
    pub async fn inventory(&self) -> Result<Vec<StockItem>> {
        self.handle.inventory().await
    }

    /// All sales orders, newest first.
    pub async fn sales_orders(&self) -> Result<Vec<SalesOrder>> {
        self.handle.sales_orders().await
    }

    /// All purchase orders, newest first.
    pub async fn purchase_orders(&self) -> Result<Vec<PurchaseOrder>> {
        self.handle.purchase_orders().await
    }

    /// Operation counters.
    pub fn telemetry(&self) -> &Metrics {
        &self.metrics
    }

    /// Configuration the books were opened with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shut the books down.
    pub async fn shutdown(self) -> Result<()> {
        self.handle.shutdown().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;
    use chrono::Datelike;

    async fn open_empty() -> Books {
        Books::open(Config::default(), SeedData::default()).await.unwrap()
    }

    fn today() -> NaiveDate {
        chrono::Utc::now().date_naive()
    }

    #[tokio::test]
    async fn test_open_and_shutdown() {
        let books = open_empty().await;
        books.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_post_revenue_journal() {
        let books = open_empty().await;

        books
            .post(
                vec![
                    JournalLine::debit(Account::new("1200", "Accounts Receivable"), "Invoice", Decimal::from(1000)),
                    JournalLine::credit(Account::new("4000", "Sales Revenue"), "Sale", Decimal::from(1000)),
                ],
                "T1",
            )
            .await
            .unwrap();

        let entries = books.ledger_entries().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.reference == "T1"));

        let snapshot = books.compute_metrics().await.unwrap();
        assert_eq!(snapshot.net_revenue, Decimal::from(1000));

        assert_eq!(books.telemetry().journals_posted.get(), 1);
        assert_eq!(books.telemetry().entries_appended.get(), 2);

        books.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_single_sided_journal_rejected() {
        let books = open_empty().await;

        let err = books
            .post(
                vec![JournalLine::debit(
                    Account::new("1100", "Cash at Bank"),
                    "Deposit",
                    Decimal::from(500_000_000i64),
                )],
                "BAD",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unbalanced { .. }));

        assert!(books.ledger_entries().await.unwrap().is_empty());
        assert_eq!(books.telemetry().unbalanced_rejected.get(), 1);
        assert_eq!(books.telemetry().journals_posted.get(), 0);

        books.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_sales_order_increases_net_revenue() {
        let books = open_empty().await;
        let total = Decimal::new(1540000, 2);

        let before = books.compute_metrics().await.unwrap();
        let order = books
            .add_sales_order("Makmur Jaya Trading", today(), total, SalesOrderStatus::New)
            .await
            .unwrap();
        let after = books.compute_metrics().await.unwrap();

        assert_eq!(after.net_revenue - before.net_revenue, total);
        assert_eq!(after.pending_ap, before.pending_ap);

        // Exactly one AR/revenue pair tagged with the order id
        let entries = books.ledger_entries().await.unwrap();
        let tagged: Vec<_> = entries.iter().filter(|e| e.reference == order.id).collect();
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].account.code, "1200");
        assert_eq!(tagged[0].debit, total);
        assert_eq!(tagged[1].account.code, "4000");
        assert_eq!(tagged[1].credit, total);

        books.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_purchase_order_increases_pending_ap_only() {
        let books = open_empty().await;
        let total = Decimal::from(55_000_000i64);

        let before = books.compute_metrics().await.unwrap();
        books
            .add_purchase_order("Teak Wood Distributors", today(), total, PurchaseOrderStatus::Ordered)
            .await
            .unwrap();
        let after = books.compute_metrics().await.unwrap();

        assert_eq!(after.pending_ap - before.pending_ap, total);
        assert_eq!(after.net_revenue, before.net_revenue);

        books.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_order_id_sequence_from_empty() {
        let books = open_empty().await;
        let year = today().year();

        let mut ids = Vec::new();
        for i in 0..3 {
            let order = books
                .add_sales_order(
                    format!("Customer {i}"),
                    today(),
                    Decimal::from(100 + i),
                    SalesOrderStatus::New,
                )
                .await
                .unwrap();
            ids.push(order.id);
        }

        assert_eq!(ids[0], format!("SO-{year}-002"));
        assert_eq!(ids[1], format!("SO-{year}-003"));
        assert_eq!(ids[2], format!("SO-{year}-004"));

        // Each order posted one balanced two-line journal
        assert_eq!(books.ledger_entries().await.unwrap().len(), 6);

        books.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_stock_rejects_negative_quantity() {
        let books = Books::open(Config::default(), SeedData::demo()).await.unwrap();

        let before = books.inventory().await.unwrap();
        let err = books.update_stock("1", -5).await.unwrap_err();
        assert!(matches!(err, Error::InvalidQuantity(-5)));

        let after = books.inventory().await.unwrap();
        assert_eq!(before, after);
        assert_eq!(books.telemetry().stock_adjustments.get(), 0);

        books.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_demo_seed_snapshot() {
        let books = Books::open(Config::default(), SeedData::demo()).await.unwrap();

        let snapshot = books.compute_metrics().await.unwrap();
        assert_eq!(snapshot.cash_on_hand, Decimal::from(515_400_000i64));
        assert_eq!(snapshot.net_revenue, Decimal::from(15_400_000i64));
        assert_eq!(snapshot.total_inventory_value, Decimal::new(2099000, 2));

        assert_eq!(books.sales_orders().await.unwrap().len(), 1);
        assert_eq!(books.purchase_orders().await.unwrap().len(), 1);

        books.shutdown().await.unwrap();
    }
}
