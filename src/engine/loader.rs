use crate::cleaner::{clean, CleanReport};
use crate::events::{Event, Observer};
use crate::storage::Dataset;
use crate::warehouse::{schema, Warehouse};

/// Outcome of loading one dataset into the warehouse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records the CSV reader could not decode.
    pub malformed: usize,
    pub cleaning: CleanReport,
    pub inserted: usize,
    /// Cleaned rows the warehouse rejected.
    pub skipped: usize
}

/// Cleans a dataset and inserts it into the warehouse one row at a time.
pub struct Loader<O> {
    observer: O
}

impl<O: Observer> Loader<O> {
    pub fn new(observer: O) -> Self {
        Self { observer }
    }

    /// Cleans `dataset`, applies `ddl` and inserts every cleaned row.
    ///
    /// Each row is its own autocommitted statement: a rejected row is reported and
    /// skipped and the next row is still attempted. Nothing is rolled back if the
    /// load stops part way.
    ///
    /// # Errors
    /// Returns the warehouse error if the schema cannot be applied. Row failures
    /// never surface here; they are counted in [`LoadReport::skipped`].
    pub async fn load<W: Warehouse>(&self, warehouse: &mut W, dataset: Dataset, ddl: &str) -> Result<LoadReport, W::Error> {
        let cleaned = clean(dataset.rows, &self.observer);

        warehouse.apply_schema(ddl).await?;
        self.observer.notify(&Event::SchemaApplied { table: schema::TABLE_NAME, version: schema::SCHEMA_VERSION });

        let statement = schema::insert_statement();
        let mut report = LoadReport {
            malformed: dataset.malformed,
            cleaning: cleaned.report,
            ..LoadReport::default()
        };

        for row in cleaned.rows {
            match warehouse.insert(&statement, &row).await {
                Ok(_) => {
                    report.inserted += 1;
                    self.observer.notify(&Event::RowInserted { transaction_id: row.transaction_id });
                }
                Err(error) => {
                    report.skipped += 1;
                    self.observer.notify(&Event::RowRejected { row, error: error.to_string() });
                }
            }
        }

        self.observer.notify(&Event::LoadFinished { report: report.clone() });

        Ok(report)
    }
}
