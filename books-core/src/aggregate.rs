//! KPI aggregation over the ledger and inventory
//!
//! [`compute_metrics`] is a pure, deterministic full re-scan. There is no
//! incremental or cached state to keep consistent; callers decide when to
//! recompute and whether to cache the snapshot. The sums run over the entire
//! ledger history -- there is no period scoping or accumulator reset.

use crate::types::{AccountCategory, LedgerEntry, StockItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived financial KPIs, all signed running sums.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Credit minus debit over all revenue accounts
    pub net_revenue: Decimal,

    /// Debit minus credit over all expense accounts
    pub total_cogs: Decimal,

    /// Credit minus debit over all liability accounts
    pub pending_ap: Decimal,

    /// Sum of derived total value over all stock items
    pub total_inventory_value: Decimal,

    /// Debit minus credit over all cash accounts
    pub cash_on_hand: Decimal,
}

/// Recompute every KPI from the full ledger history and current inventory.
pub fn compute_metrics(entries: &[LedgerEntry], items: &[StockItem]) -> MetricsSnapshot {
    let mut snapshot = MetricsSnapshot::default();

    for entry in entries {
        match entry.account.category {
            AccountCategory::Revenue => snapshot.net_revenue += entry.credit - entry.debit,
            AccountCategory::Expense => snapshot.total_cogs += entry.debit - entry.credit,
            AccountCategory::Liability => snapshot.pending_ap += entry.credit - entry.debit,
            AccountCategory::Cash => snapshot.cash_on_hand += entry.debit - entry.credit,
            AccountCategory::Asset | AccountCategory::Equity | AccountCategory::Other => {}
        }
    }

    snapshot.total_inventory_value = items.iter().map(|item| item.total_value).sum();

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting;
    use crate::seed::SeedData;
    use crate::types::{Account, JournalLine};

    #[test]
    fn test_empty_state_is_all_zero() {
        let snapshot = compute_metrics(&[], &[]);
        assert_eq!(snapshot, MetricsSnapshot::default());
    }

    #[test]
    fn test_demo_seed_metrics() {
        let seed = SeedData::demo();
        let snapshot = compute_metrics(&seed.ledger, &seed.inventory);

        // Opening balance plus the seeded sales receipt
        assert_eq!(snapshot.cash_on_hand, Decimal::from(515_400_000i64));
        assert_eq!(snapshot.net_revenue, Decimal::from(15_400_000i64));
        assert_eq!(snapshot.pending_ap, Decimal::ZERO);
        assert_eq!(snapshot.total_cogs, Decimal::ZERO);
        // 15 * 850 + 12 * 220 + 4 * 1400
        assert_eq!(snapshot.total_inventory_value, Decimal::new(2099000, 2));
    }

    #[test]
    fn test_signed_sums_net_out() {
        // Revenue credited then partially reversed by a debit
        let entries = posting::into_entries(
            vec![
                JournalLine::debit(Account::new("1100", "Cash at Bank"), "Receipt", Decimal::from(1000)),
                JournalLine::credit(Account::new("4000", "Sales Revenue"), "Sale", Decimal::from(1000)),
            ],
            "S1",
        );
        let reversal = posting::into_entries(
            vec![
                JournalLine::debit(Account::new("4000", "Sales Revenue"), "Refund", Decimal::from(250)),
                JournalLine::credit(Account::new("1100", "Cash at Bank"), "Refund paid", Decimal::from(250)),
            ],
            "S1-R",
        );

        let all: Vec<_> = entries.into_iter().chain(reversal).collect();
        let snapshot = compute_metrics(&all, &[]);

        assert_eq!(snapshot.net_revenue, Decimal::from(750));
        assert_eq!(snapshot.cash_on_hand, Decimal::from(750));
    }

    #[test]
    fn test_cogs_and_ap_accumulate() {
        let entries = posting::into_entries(
            vec![
                JournalLine::debit(Account::new("5000", "Cost of Goods Sold"), "COGS", Decimal::from(400)),
                JournalLine::credit(Account::new("2000", "Accounts Payable"), "Vendor bill", Decimal::from(400)),
            ],
            "P1",
        );

        let snapshot = compute_metrics(&entries, &[]);
        assert_eq!(snapshot.total_cogs, Decimal::from(400));
        assert_eq!(snapshot.pending_ap, Decimal::from(400));
        assert_eq!(snapshot.net_revenue, Decimal::ZERO);
        assert_eq!(snapshot.cash_on_hand, Decimal::ZERO);
    }
}
