//! In-memory stores owned by the writer actor
//!
//! # Stores
//!
//! - [`LedgerStore`] - append-only posted entries, newest first
//! - [`InventoryStore`] - stock items, mutated in place
//! - [`OrderBook`] - sales and purchase order lists, newest first
//!
//! None of these are shared directly; the actor serializes every access, so
//! no store needs its own locking.

use crate::error::{Error, Result};
use crate::types::{LedgerEntry, PurchaseOrder, SalesOrder, StockItem};

/// Append-only general ledger.
///
/// Entries are prepended so the most recent postings read first. There is no
/// update or delete operation, and no cached derived sums.
#[derive(Debug, Default)]
pub struct LedgerStore {
    entries: Vec<LedgerEntry>,
}

impl LedgerStore {
    /// Create a store from seed entries (already newest-first).
    pub fn new(seed: Vec<LedgerEntry>) -> Self {
        Self { entries: seed }
    }

    /// Append a posted batch as a single unit, ahead of existing entries.
    ///
    /// Batch-internal order is preserved.
    pub fn append(&mut self, batch: Vec<LedgerEntry>) {
        let batch_len = batch.len();
        self.entries.splice(0..0, batch);

        tracing::debug!(
            appended = batch_len,
            total = self.entries.len(),
            "ledger batch appended"
        );
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of posted entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Warehouse stock, mutated in place by administrative adjustments.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: Vec<StockItem>,
}

impl InventoryStore {
    /// Create a store from seed items.
    pub fn new(seed: Vec<StockItem>) -> Self {
        Self { items: seed }
    }

    /// Set an item's quantity, recomputing its derived total value.
    ///
    /// Negative quantities are rejected rather than clamped; unknown ids
    /// fail without touching any item. No ledger posting results from this
    /// (stock corrections are administrative, not sale/purchase events).
    pub fn update_stock(&mut self, item_id: &str, new_quantity: i64) -> Result<()> {
        if new_quantity < 0 {
            return Err(Error::InvalidQuantity(new_quantity));
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| Error::ItemNotFound(item_id.to_string()))?;

        item.set_quantity(new_quantity);

        tracing::debug!(item_id, new_quantity, "stock adjusted");

        Ok(())
    }

    /// All stock items.
    pub fn items(&self) -> &[StockItem] {
        &self.items
    }
}

/// Sales and purchase order lists, newest first.
#[derive(Debug, Default)]
pub struct OrderBook {
    sales: Vec<SalesOrder>,
    purchases: Vec<PurchaseOrder>,
}

impl OrderBook {
    /// Create an order book from seed orders (already newest-first).
    pub fn new(sales: Vec<SalesOrder>, purchases: Vec<PurchaseOrder>) -> Self {
        Self { sales, purchases }
    }

    /// Prepend a sales order.
    pub fn add_sales(&mut self, order: SalesOrder) {
        self.sales.insert(0, order);
    }

    /// Prepend a purchase order.
    pub fn add_purchase(&mut self, order: PurchaseOrder) {
        self.purchases.insert(0, order);
    }

    /// All sales orders, newest first.
    pub fn sales(&self) -> &[SalesOrder] {
        &self.sales
    }

    /// All purchase orders, newest first.
    pub fn purchases(&self) -> &[PurchaseOrder] {
        &self.purchases
    }
}
