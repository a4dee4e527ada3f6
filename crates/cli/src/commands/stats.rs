//! Batch statistics command.

use agriq_core::{BatchStatistics, InventorySummary, LowStockPolicy};
use agriq_web::db::BatchRepository;

use super::{CliError, connect};

/// Print batch statistics.
///
/// The SQL aggregates are cross-checked against the same figures computed in
/// process from the batch listing; a mismatch is logged as a warning.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a query fails.
pub async fn run(json: bool) -> Result<(), CliError> {
    let pool = connect().await?;
    let repo = BatchRepository::new(&pool);

    let (stats, batches) = tokio::try_join!(repo.statistics(), repo.list_with_products())?;

    let policy = LowStockPolicy::default();
    let summary = InventorySummary::from_counters(batches.iter().map(|b| &b.batch.counters));
    let low_stock = batches.iter().filter(|b| policy.is_low(&b.batch.counters)).count();

    if summary != stats.summary || i64::try_from(low_stock).ok() != Some(stats.low_stock_batches) {
        tracing::warn!(
            sql_low_stock = stats.low_stock_batches,
            listed_low_stock = low_stock,
            "SQL statistics disagree with the batch listing"
        );
    }

    #[allow(clippy::print_stdout)]
    {
        if json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            print!("{}", render(&stats));
        }
    }

    Ok(())
}

fn render(stats: &BatchStatistics) -> String {
    let s = &stats.summary;
    let rows = [
        ("Initial", s.initial),
        ("Deposit", s.deposit),
        ("Market", s.market),
        ("Sent", s.sent),
        ("Received", s.received),
        ("Discarded", s.discarded),
        ("Reserved", s.reserved),
        ("Sold", s.sold),
    ];

    let mut out = format!(
        "Batches:   {}\nLow stock: {}\n\n",
        stats.total_batches, stats.low_stock_batches
    );
    for (label, value) in rows {
        let value = value.map_or_else(|| "-".to_string(), |v| v.normalize().to_string());
        out.push_str(&format!("{label:<10} {value:>12}\n"));
    }
    out
}
