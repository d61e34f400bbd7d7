//! Books demo binary
//!
//! Opens the books with a seed data set and logs an opening KPI snapshot.

use books_core::{Books, Config, SeedData};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("starting TradeBooks demo");

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    // Load seed data
    let seed = match &config.seed_file {
        Some(path) => SeedData::from_file(path)?,
        None => SeedData::demo(),
    };

    // Open books
    let books = Books::open(config, seed).await?;

    let snapshot = books.compute_metrics().await?;
    tracing::info!(
        net_revenue = %snapshot.net_revenue,
        total_cogs = %snapshot.total_cogs,
        pending_ap = %snapshot.pending_ap,
        cash_on_hand = %snapshot.cash_on_hand,
        inventory_value = %snapshot.total_inventory_value,
        "opening KPI snapshot"
    );

    books.shutdown().await?;
    Ok(())
}
