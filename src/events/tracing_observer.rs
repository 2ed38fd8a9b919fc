use tracing::{debug, error, info, warn};

use crate::events::{Event, Observer};

/// Forwards pipeline events to the `tracing` subscriber installed by the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&self, event: &Event) {
        match event {
            Event::GenerationStarted { records } => info!("Starting revenue data generation of {records} records..."),
            Event::GenerationFinished { records } => info!("Finished revenue data generation ({records} records)"),
            Event::DatasetSaved { path, records } => info!("Revenue data saved to {} ({records} records)", path.display()),
            Event::CleaningStarted { rows } => info!("Beginning data cleaning of {rows} rows..."),
            Event::PaymentMethodsFilled { rows } => warn!("Filled {rows} missing payment methods with 'unknown'"),
            Event::RowsDropped { reason, rows } => {
                warn!("Dropped {} rows with {reason}:", rows.len());

                for row in rows {
                    warn!("  {row:?}");
                }
            }
            Event::RevenueCorrected { corrections } => {
                warn!("Corrected {} revenue mismatches:", corrections.len());

                for correction in corrections {
                    warn!(
                        "  [{}] recorded {:?}, calculated {}",
                        correction.transaction_id.as_deref().unwrap_or("<missing id>"),
                        correction.recorded,
                        correction.calculated
                    );
                }
            }
            Event::CleaningFinished { report } => {
                info!(
                    "Data cleaning complete: {} of {} rows kept, {} revenues corrected",
                    report.kept(),
                    report.input_rows,
                    report.corrected_revenues
                );

                for (reason, count) in &report.dropped {
                    info!("  dropped {count} rows with {reason}");
                }
            }
            Event::SchemaApplied { table, version } => info!("Created warehouse table [{table}] (schema v{version}) if not already existing"),
            Event::RowInserted { transaction_id } => debug!("Inserted transaction [{}]", transaction_id.as_deref().unwrap_or("<missing id>")),
            Event::RowRejected { row, error } => error!("Failed to insert row {row:?} | {error}"),
            Event::LoadFinished { report } => info!(
                "Warehouse load complete: {} inserted, {} skipped, {} malformed records",
                report.inserted,
                report.skipped,
                report.malformed
            ),
            Event::StatementSucceeded { statement, result } => {
                info!("Successfully executed query:\n{statement}");

                if result.rows.is_empty() {
                    info!("No Results");
                } else {
                    info!("Results: {}", result.columns.join(" | "));

                    for row in &result.rows {
                        info!("  {row:?}");
                    }
                }
            }
            Event::StatementFailed { statement, error } => error!("Error executing query:\n{statement}\nError: {error}"),
            Event::TrailingSegmentDiscarded { segment } => {
                warn!("Discarded text after the last ';' in the validation batch: {segment:?}")
            }
            Event::ValidationFinished { report } => info!(
                "Finished validation queries: {} succeeded, {} failed",
                report.succeeded,
                report.failed
            )
        }
    }
}
