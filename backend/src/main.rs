use anyhow::Context;
use invoice_manager::{AppConfig, InvoiceManager, LoadState};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(path) = std::env::args().nth(1) {
        config.data_path = PathBuf::from(path);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut manager = InvoiceManager::new(config);
    info!(
        "Starting invoice manager with data from {}",
        manager.config().data_path.display()
    );
    let mut readiness = manager.readiness();

    manager
        .initialize_from_config()
        .await
        .context("Failed to load invoice data")?;

    readiness
        .wait_for(|state| *state == LoadState::Ready)
        .await
        .context("Readiness channel closed")?;

    let counts = manager.status_counts();
    println!(
        "{} invoices: {} draft ({:.0}%), {} published ({:.0}%), {} canceled ({:.0}%)",
        counts.total,
        counts.drafts,
        counts.draft_percent,
        counts.published,
        counts.published_percent,
        counts.canceled,
        counts.canceled_percent,
    );

    for row in manager.invoice_list() {
        println!(
            "{:<12} {:<10} {:<24} {:>12} {:>12}",
            row.number,
            row.status.as_str(),
            row.recipient_name,
            row.formatted_total,
            row.formatted_vat
        );
    }

    Ok(())
}
