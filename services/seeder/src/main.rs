mod config;
mod operations;
mod predictions;
mod records;
mod references;
mod sampling;

use anyhow::{Context, Result};
use fleetstore::{insert_batched, tables, RecordStore, RestStore, WriteOutcome};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::config::SeederConfig;
use crate::operations::OperationParams;
use crate::predictions::PredictionParams;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Abort before any network call when the store settings are missing.
    let cfg = match SeederConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(2);
        }
    };

    let store = RestStore::new(&cfg.supabase_url, &cfg.supabase_key);
    run(&cfg, &store).await
}

async fn run(cfg: &SeederConfig, store: &dyn RecordStore) -> Result<()> {
    info!("seeding fake operational data into the fleet store");

    let refs = references::load(store).await?;

    info!(count = cfg.operation_count, "generating operation history");
    let ops = operations::generate(
        &OperationParams::trailing_window(cfg.operation_count),
        &refs,
    );
    let ops_outcome = insert_batched(
        store,
        tables::OPERATION_HISTORY,
        &to_rows(&ops)?,
        cfg.batch_size,
    )
    .await?;
    report(tables::OPERATION_HISTORY, &ops_outcome);

    info!(days = cfg.prediction_days, "generating prediction cache");
    let predictions = predictions::generate(
        &PredictionParams {
            horizon_days: cfg.prediction_days,
        },
        &refs,
    );
    let predictions_outcome = insert_batched(
        store,
        tables::PREDICTION_CACHE,
        &to_rows(&predictions)?,
        cfg.batch_size,
    )
    .await?;
    report(tables::PREDICTION_CACHE, &predictions_outcome);

    info!(
        persisted = ops_outcome.succeeded + predictions_outcome.succeeded,
        failed = ops_outcome.failures.len() + predictions_outcome.failures.len(),
        "seeding finished"
    );
    Ok(())
}

fn to_rows<T: Serialize>(records: &[T]) -> Result<Vec<JsonValue>> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).context("failed to serialize record"))
        .collect()
}

fn report(table: &str, outcome: &WriteOutcome) {
    if outcome.all_ok() {
        info!(table, "persisted {}/{} records", outcome.succeeded, outcome.attempted);
    } else {
        warn!(
            table,
            "persisted {}/{} records, {} failed",
            outcome.succeeded,
            outcome.attempted,
            outcome.failures.len()
        );
        for f in &outcome.failures {
            warn!(table, "record {}: {}", f.index, f.reason);
        }
    }
}
