//! Batch stock counters, the low-stock policy and inventory summaries.
//!
//! A batch carries nine running counters that are maintained by the write side
//! of the application. Nothing here derives one counter from another; these
//! types only classify and aggregate what is stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deposit quantity below which a batch with initial stock counts as low.
pub const LOW_STOCK_DEPOSIT_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// The stock-ledger columns of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StockCounters {
    pub initial: Decimal,
    pub deposit: Decimal,
    pub market: Decimal,
    pub sent: Decimal,
    pub received: Decimal,
    pub discarded: Decimal,
    pub reserved: Decimal,
    pub sold: Decimal,
    pub discrepancy: Decimal,
}

/// Decides whether a batch is running low.
///
/// A batch is low when it started with stock and its deposit is under the
/// threshold, or when it started empty and the deposit is exactly empty. A
/// batch that started empty but has deposit stock (e.g. from an adjustment) is
/// not low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockPolicy {
    deposit_threshold: Decimal,
}

impl Default for LowStockPolicy {
    fn default() -> Self {
        Self {
            deposit_threshold: LOW_STOCK_DEPOSIT_THRESHOLD,
        }
    }
}

impl LowStockPolicy {
    #[must_use]
    pub const fn with_threshold(deposit_threshold: Decimal) -> Self {
        Self { deposit_threshold }
    }

    /// The deposit threshold, bound into the SQL count so both sides agree.
    #[must_use]
    pub const fn deposit_threshold(&self) -> Decimal {
        self.deposit_threshold
    }

    #[must_use]
    pub fn is_low_stock(&self, initial: Decimal, deposit: Decimal) -> bool {
        (initial > Decimal::ZERO && deposit < self.deposit_threshold)
            || (initial.is_zero() && deposit.is_zero())
    }

    #[must_use]
    pub fn is_low(&self, counters: &StockCounters) -> bool {
        self.is_low_stock(counters.initial, counters.deposit)
    }
}

/// Sums of the batch counters across all batches.
///
/// Every field is `None` when there are no batches, mirroring SQL `SUM` over
/// an empty set. The discrepancy counter is not part of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventorySummary {
    pub initial: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub market: Option<Decimal>,
    pub sent: Option<Decimal>,
    pub received: Option<Decimal>,
    pub discarded: Option<Decimal>,
    pub reserved: Option<Decimal>,
    pub sold: Option<Decimal>,
}

impl InventorySummary {
    /// Aggregate counters in process with the same semantics as the SQL query.
    pub fn from_counters<'a, I>(counters: I) -> Self
    where
        I: IntoIterator<Item = &'a StockCounters>,
    {
        counters.into_iter().fold(Self::default(), |acc, c| Self {
            initial: Some(acc.initial.unwrap_or_default() + c.initial),
            deposit: Some(acc.deposit.unwrap_or_default() + c.deposit),
            market: Some(acc.market.unwrap_or_default() + c.market),
            sent: Some(acc.sent.unwrap_or_default() + c.sent),
            received: Some(acc.received.unwrap_or_default() + c.received),
            discarded: Some(acc.discarded.unwrap_or_default() + c.discarded),
            reserved: Some(acc.reserved.unwrap_or_default() + c.reserved),
            sold: Some(acc.sold.unwrap_or_default() + c.sold),
        })
    }

    /// True when the summary was computed over zero batches.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.initial.is_none()
    }
}

/// The dashboard's batch statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub total_batches: i64,
    pub low_stock_batches: i64,
    pub summary: InventorySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(num: i64, scale: u32) -> Decimal {
        Decimal::new(num, scale)
    }

    #[test]
    fn test_threshold_is_one_tenth() {
        assert_eq!(LOW_STOCK_DEPOSIT_THRESHOLD, dec(1, 1));
        assert_eq!(
            LowStockPolicy::default().deposit_threshold(),
            LOW_STOCK_DEPOSIT_THRESHOLD
        );
    }

    #[test]
    fn test_low_stock_cases() {
        let policy = LowStockPolicy::default();

        // Empty batch.
        assert!(policy.is_low_stock(dec(0, 0), dec(0, 0)));
        // Started with stock, deposit nearly gone.
        assert!(policy.is_low_stock(dec(5, 0), dec(5, 2)));
        // Started with stock, deposit above threshold.
        assert!(!policy.is_low_stock(dec(5, 0), dec(2, 1)));
        // Started empty, deposit has stock.
        assert!(!policy.is_low_stock(dec(0, 0), dec(1, 0)));
    }

    #[test]
    fn test_low_stock_threshold_is_exclusive() {
        let policy = LowStockPolicy::default();
        assert!(!policy.is_low_stock(dec(5, 0), dec(1, 1)));
        assert!(policy.is_low_stock(dec(5, 0), dec(99, 3)));
    }

    #[test]
    fn test_custom_threshold() {
        let policy = LowStockPolicy::with_threshold(dec(10, 0));
        assert!(policy.is_low_stock(dec(100, 0), dec(9, 0)));
        assert!(!policy.is_low_stock(dec(100, 0), dec(10, 0)));
    }

    #[test]
    fn test_is_low_reads_initial_and_deposit() {
        let counters = StockCounters {
            initial: dec(20, 0),
            deposit: dec(0, 0),
            sent: dec(20, 0),
            ..StockCounters::default()
        };
        assert!(LowStockPolicy::default().is_low(&counters));
    }

    #[test]
    fn test_summary_of_no_batches_is_empty() {
        let summary = InventorySummary::from_counters(std::iter::empty::<&StockCounters>());
        assert!(summary.is_empty());
        assert_eq!(summary, InventorySummary::default());
    }

    #[test]
    fn test_summary_sums_each_counter() {
        let batches = [
            StockCounters {
                initial: dec(100, 0),
                deposit: dec(60, 0),
                market: dec(30, 0),
                sent: dec(40, 0),
                received: dec(35, 0),
                discarded: dec(5, 0),
                reserved: dec(2, 0),
                sold: dec(28, 0),
                discrepancy: dec(2, 0),
            },
            StockCounters {
                initial: dec(505, 1),
                deposit: dec(505, 1),
                ..StockCounters::default()
            },
            StockCounters {
                initial: dec(10, 0),
                deposit: dec(5, 2),
                market: dec(9, 0),
                sent: dec(9, 0),
                received: dec(9, 0),
                sold: dec(4, 0),
                ..StockCounters::default()
            },
        ];

        let summary = InventorySummary::from_counters(&batches);

        assert_eq!(summary.initial, Some(dec(1605, 1)));
        assert_eq!(summary.deposit, Some(dec(11055, 2)));
        assert_eq!(summary.market, Some(dec(39, 0)));
        assert_eq!(summary.sent, Some(dec(49, 0)));
        assert_eq!(summary.received, Some(dec(44, 0)));
        assert_eq!(summary.discarded, Some(dec(5, 0)));
        assert_eq!(summary.reserved, Some(dec(2, 0)));
        assert_eq!(summary.sold, Some(dec(32, 0)));
        assert!(!summary.is_empty());
    }
}
