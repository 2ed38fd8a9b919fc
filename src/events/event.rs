use std::path::PathBuf;

use crate::cleaner::{CleanReport, DropReason, RevenueCorrection};
use crate::engine::{LoadReport, ValidationReport};
use crate::models::{RawTransaction, Transaction};
use crate::warehouse::QueryResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    GenerationStarted {
        records: usize
    },
    GenerationFinished {
        records: usize
    },
    DatasetSaved {
        path: PathBuf,
        records: usize
    },
    CleaningStarted {
        rows: usize
    },
    PaymentMethodsFilled {
        rows: usize
    },
    RowsDropped {
        reason: DropReason,
        rows: Vec<RawTransaction>
    },
    RevenueCorrected {
        corrections: Vec<RevenueCorrection>
    },
    CleaningFinished {
        report: CleanReport
    },
    SchemaApplied {
        table: &'static str,
        version: u32
    },
    RowInserted {
        transaction_id: Option<String>
    },
    RowRejected {
        row: Transaction,
        error: String
    },
    LoadFinished {
        report: LoadReport
    },
    StatementSucceeded {
        statement: String,
        result: QueryResult
    },
    StatementFailed {
        statement: String,
        error: String
    },
    TrailingSegmentDiscarded {
        segment: String
    },
    ValidationFinished {
        report: ValidationReport
    }
}
