use crate::events::{Event, Observer};
use crate::warehouse::Warehouse;

/// Outcome of running one validation batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub succeeded: usize,
    pub failed: usize
}

/// Splits a `;`-delimited batch into statements.
///
/// The segment after the last `;` is always discarded, so `"SELECT 1; SELECT 2;"`
/// yields `["SELECT 1", " SELECT 2"]`. Returns the statements and the discarded segment.
pub fn split_statements(batch: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = batch.split(';').collect();
    let trailing = segments.pop().unwrap_or_default();

    (segments, trailing)
}

/// Runs post-load checks against the warehouse, one statement at a time.
pub struct ValidationRunner<O> {
    observer: O
}

impl<O: Observer> ValidationRunner<O> {
    pub fn new(observer: O) -> Self {
        Self { observer }
    }

    /// Executes every statement of `batch` in order.
    ///
    /// A failing statement is reported and the batch continues. Blank segments
    /// (`";;"`) are skipped. Text after the final `;` is never executed.
    pub async fn run<W: Warehouse>(&self, warehouse: &mut W, batch: &str) -> ValidationReport {
        let (statements, trailing) = split_statements(batch);
        let mut report = ValidationReport::default();

        if !trailing.trim().is_empty() {
            self.observer.notify(&Event::TrailingSegmentDiscarded { segment: trailing.to_string() });
        }

        for statement in statements.into_iter().filter(|statement| !statement.trim().is_empty()) {
            match warehouse.query(statement).await {
                Ok(result) => {
                    report.succeeded += 1;
                    self.observer.notify(&Event::StatementSucceeded { statement: statement.to_string(), result });
                }
                Err(error) => {
                    report.failed += 1;
                    self.observer.notify(&Event::StatementFailed { statement: statement.to_string(), error: error.to_string() });
                }
            }
        }

        self.observer.notify(&Event::ValidationFinished { report });

        report
    }
}
