mod basic;
mod columns;
pub mod patterns;

pub use basic::{BasicErrors, validate_basic};
pub use columns::{ColumnErrors, RowErrors, validate_columns};

use crate::models::{BasicMetadata, ColumnDescriptor};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Field-keyed messages for one validation pass. Both maps are ordered so the
/// same input always serializes to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub basic_errors: BasicErrors,
    pub column_errors: ColumnErrors,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.basic_errors.is_empty() && self.column_errors.is_empty()
    }

    /// Total number of failing fields across the form.
    pub fn error_count(&self) -> usize {
        self.basic_errors.len() + self.column_errors.values().map(|row| row.len()).sum::<usize>()
    }
}

/// Validates the basic metadata and the column list. Never fails; every
/// problem becomes an entry in the report.
pub fn validate(basic: &BasicMetadata, columns: &[ColumnDescriptor]) -> ValidationReport {
    let report = ValidationReport {
        basic_errors: validate_basic(basic),
        column_errors: validate_columns(columns),
    };

    debug!(
        columns = columns.len(),
        basic_errors = report.basic_errors.len(),
        invalid_rows = report.column_errors.len(),
        "Validated configuration"
    );

    report
}
