//! Single-writer actor owning all book state
//!
//! All mutating operations (posting, order creation, stock adjustment) and
//! snapshot reads go through one actor task, so each operation appears
//! atomic to every reader and no read ever observes a half-appended
//! journal.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │               BooksHandle (Clone)                     │
//! │         Sends messages to actor mailbox               │
//! └─────────────────────┬────────────────────────────────┘
//!                       │
//!                       │ mpsc::channel (bounded)
//!                       ▼
//! ┌──────────────────────────────────────────────────────┐
//! │              BooksActor (Single Task)                 │
//! │   LedgerStore │ InventoryStore │ OrderBook            │
//! │   validate → mutate → reply (oneshot)                 │
//! └──────────────────────────────────────────────────────┘
//! ```

use crate::aggregate::{compute_metrics, MetricsSnapshot};
use crate::error::{Error, Result};
use crate::seed::SeedData;
use crate::store::{InventoryStore, LedgerStore, OrderBook};
use crate::types::{
    JournalLine, LedgerEntry, PurchaseOrder, PurchaseOrderStatus, SalesOrder, SalesOrderStatus,
    StockItem,
};
use crate::{orders, posting};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::{mpsc, oneshot};

/// Message sent to the books actor
#[derive(Debug)]
pub enum BooksMessage {
    /// Validate and post a journal
    PostJournal {
        /// Unvalidated journal lines
        lines: Vec<JournalLine>,
        /// Grouping reference stamped on each resulting entry
        reference: String,
        /// Reply channel
        respond: oneshot::Sender<Result<()>>,
    },

    /// Create a sales order and its journal as one unit
    AddSalesOrder {
        /// Customer name
        customer: String,
        /// Order date
        date: NaiveDate,
        /// Order total
        total: Decimal,
        /// Initial lifecycle status
        status: SalesOrderStatus,
        /// Reply channel
        respond: oneshot::Sender<Result<SalesOrder>>,
    },

    /// Create a purchase order and its journal as one unit
    AddPurchaseOrder {
        /// Vendor name
        vendor: String,
        /// Order date
        date: NaiveDate,
        /// Order total
        total: Decimal,
        /// Initial lifecycle status
        status: PurchaseOrderStatus,
        /// Reply channel
        respond: oneshot::Sender<Result<PurchaseOrder>>,
    },

    /// Adjust a stock item's quantity
    UpdateStock {
        /// Stock item identifier
        item_id: String,
        /// New non-negative quantity
        new_quantity: i64,
        /// Reply channel
        respond: oneshot::Sender<Result<()>>,
    },

    /// Recompute the KPI snapshot from current state
    ComputeMetrics {
        /// Reply channel
        respond: oneshot::Sender<MetricsSnapshot>,
    },

    /// Read all ledger entries, newest first
    GetLedger {
        /// Reply channel
        respond: oneshot::Sender<Vec<LedgerEntry>>,
    },

    /// Read all stock items
    GetInventory {
        /// Reply channel
        respond: oneshot::Sender<Vec<StockItem>>,
    },

    /// Read all sales orders, newest first
    GetSalesOrders {
        /// Reply channel
        respond: oneshot::Sender<Vec<SalesOrder>>,
    },

    /// Read all purchase orders, newest first
    GetPurchaseOrders {
        /// Reply channel
        respond: oneshot::Sender<Vec<PurchaseOrder>>,
    },

    /// Shut the actor down
    Shutdown,
}

/// Actor that processes book messages
#[derive(Debug)]
pub struct BooksActor {
    /// Append-only general ledger
    ledger: LedgerStore,

    /// Warehouse stock
    inventory: InventoryStore,

    /// Sales and purchase orders
    orders: OrderBook,

    /// Mailbox for incoming messages
    mailbox: mpsc::Receiver<BooksMessage>,
}

impl BooksActor {
    /// Create a new actor seeded with initial state.
    pub fn new(seed: SeedData, mailbox: mpsc::Receiver<BooksMessage>) -> Self {
        Self {
            ledger: LedgerStore::new(seed.ledger),
            inventory: InventoryStore::new(seed.inventory),
            orders: OrderBook::new(seed.sales_orders, seed.purchase_orders),
            mailbox,
        }
    }

    /// Run the actor event loop.
    pub async fn run(mut self) {
        while let Some(msg) = self.mailbox.recv().await {
            match msg {
                BooksMessage::Shutdown => break,
                msg => self.handle_message(msg),
            }
        }
        tracing::debug!("books actor stopped");
    }

    /// Handle a single message.
    fn handle_message(&mut self, msg: BooksMessage) {
        match msg {
            BooksMessage::PostJournal {
                lines,
                reference,
                respond,
            } => {
                let _ = respond.send(self.post_journal(lines, &reference));
            }

            BooksMessage::AddSalesOrder {
                customer,
                date,
                total,
                status,
                respond,
            } => {
                let _ = respond.send(self.add_sales_order(customer, date, total, status));
            }

            BooksMessage::AddPurchaseOrder {
                vendor,
                date,
                total,
                status,
                respond,
            } => {
                let _ = respond.send(self.add_purchase_order(vendor, date, total, status));
            }

            BooksMessage::UpdateStock {
                item_id,
                new_quantity,
                respond,
            } => {
                let _ = respond.send(self.inventory.update_stock(&item_id, new_quantity));
            }

            BooksMessage::ComputeMetrics { respond } => {
                let snapshot = compute_metrics(self.ledger.entries(), self.inventory.items());
                let _ = respond.send(snapshot);
            }

            BooksMessage::GetLedger { respond } => {
                let _ = respond.send(self.ledger.entries().to_vec());
            }

            BooksMessage::GetInventory { respond } => {
                let _ = respond.send(self.inventory.items().to_vec());
            }

            BooksMessage::GetSalesOrders { respond } => {
                let _ = respond.send(self.orders.sales().to_vec());
            }

            BooksMessage::GetPurchaseOrders { respond } => {
                let _ = respond.send(self.orders.purchases().to_vec());
            }

            BooksMessage::Shutdown => {
                // Handled in the main loop
            }
        }
    }

    /// Validate a journal and append it as one unit.
    fn post_journal(&mut self, lines: Vec<JournalLine>, reference: &str) -> Result<()> {
        posting::validate(&lines)?;
        let entries = posting::into_entries(lines, reference);
        self.ledger.append(entries);
        Ok(())
    }

    /// Create a sales order and post its journal atomically.
    ///
    /// The synthesized journal is validated before either store is touched,
    /// so the order and its ledger consequence land together or not at all.
    fn add_sales_order(
        &mut self,
        customer: String,
        date: NaiveDate,
        total: Decimal,
        status: SalesOrderStatus,
    ) -> Result<SalesOrder> {
        let id = orders::next_sales_order_id(self.orders.sales().len());
        let order = SalesOrder {
            id,
            customer,
            date,
            total,
            status,
        };

        let lines = orders::sales_journal(&order);
        posting::validate(&lines)?;

        let entries = posting::into_entries(lines, &order.id);
        self.ledger.append(entries);
        self.orders.add_sales(order.clone());

        Ok(order)
    }

    /// Create a purchase order and post its journal atomically.
    fn add_purchase_order(
        &mut self,
        vendor: String,
        date: NaiveDate,
        total: Decimal,
        status: PurchaseOrderStatus,
    ) -> Result<PurchaseOrder> {
        let id = orders::next_purchase_order_id(self.orders.purchases().len());
        let order = PurchaseOrder {
            id,
            vendor,
            date,
            total,
            status,
        };

        let lines = orders::purchase_journal(&order);
        posting::validate(&lines)?;

        let entries = posting::into_entries(lines, &order.id);
        self.ledger.append(entries);
        self.orders.add_purchase(order.clone());

        Ok(order)
    }
}

/// Handle for sending messages to the actor
#[derive(Debug, Clone)]
pub struct BooksHandle {
    sender: mpsc::Sender<BooksMessage>,
}

impl BooksHandle {
    /// Create a new handle.
    pub fn new(sender: mpsc::Sender<BooksMessage>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        msg: BooksMessage,
        rx: oneshot::Receiver<T>,
    ) -> Result<T> {
        self.sender
            .send(msg)
            .await
            .map_err(|_| Error::Concurrency("actor mailbox closed".to_string()))?;

        rx.await
            .map_err(|_| Error::Concurrency("response channel closed".to_string()))
    }

    /// Validate and post a journal.
    pub async fn post_journal(&self, lines: Vec<JournalLine>, reference: String) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.request(
            BooksMessage::PostJournal {
                lines,
                reference,
                respond: tx,
            },
            rx,
        )
        .await?
    }

    /// Create a sales order with its journal.
    pub async fn add_sales_order(
        &self,
        customer: String,
        date: NaiveDate,
        total: Decimal,
        status: SalesOrderStatus,
    ) -> Result<SalesOrder> {
        let (tx, rx) = oneshot::channel();
        self.request(
            BooksMessage::AddSalesOrder {
                customer,
                date,
                total,
                status,
                respond: tx,
            },
            rx,
        )
        .await?
    }

    /// Create a purchase order with its journal.
    pub async fn add_purchase_order(
        &self,
        vendor: String,
        date: NaiveDate,
        total: Decimal,
        status: PurchaseOrderStatus,
    ) -> Result<PurchaseOrder> {
        let (tx, rx) = oneshot::channel();
        self.request(
            BooksMessage::AddPurchaseOrder {
                vendor,
                date,
                total,
                status,
                respond: tx,
            },
            rx,
        )
        .await?
    }

    /// Adjust a stock item's quantity.
    pub async fn update_stock(&self, item_id: String, new_quantity: i64) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.request(
            BooksMessage::UpdateStock {
                item_id,
                new_quantity,
                respond: tx,
            },
            rx,
        )
        .await?
    }

    /// Recompute the KPI snapshot.
    pub async fn compute_metrics(&self) -> Result<MetricsSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.request(BooksMessage::ComputeMetrics { respond: tx }, rx).await
    }

    /// Read all ledger entries, newest first.
    pub async fn ledger_entries(&self) -> Result<Vec<LedgerEntry>> {
        let (tx, rx) = oneshot::channel();
        self.request(BooksMessage::GetLedger { respond: tx }, rx).await
    }

    /// Read all stock items.
    pub async fn inventory(&self) -> Result<Vec<StockItem>> {
        let (tx, rx) = oneshot::channel();
        self.request(BooksMessage::GetInventory { respond: tx }, rx).await
    }

    /// Read all sales orders, newest first.
    pub async fn sales_orders(&self) -> Result<Vec<SalesOrder>> {
        let (tx, rx) = oneshot::channel();
        self.request(BooksMessage::GetSalesOrders { respond: tx }, rx).await
    }

    /// Read all purchase orders, newest first.
    pub async fn purchase_orders(&self) -> Result<Vec<PurchaseOrder>> {
        let (tx, rx) = oneshot::channel();
        self.request(BooksMessage::GetPurchaseOrders { respond: tx }, rx).await
    }

    /// Shut the actor down.
    pub async fn shutdown(&self) -> Result<()> {
        self.sender
            .send(BooksMessage::Shutdown)
            .await
            .map_err(|_| Error::Concurrency("actor mailbox closed".to_string()))?;
        Ok(())
    }
}

/// Spawn the books actor, returning its handle.
pub fn spawn_books_actor(seed: SeedData, mailbox_capacity: usize) -> BooksHandle {
    let (tx, rx) = mpsc::channel(mailbox_capacity);
    let actor = BooksActor::new(seed, rx);

    tokio::spawn(async move {
        actor.run().await;
    });

    BooksHandle::new(tx)
}
