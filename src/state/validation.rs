use tracing::{info, warn};

use crate::state::data_model::Row;
use crate::state::options::{self, ValidationOption};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    /// The target option is missing or disabled.
    Skipped,
    Completed {
        max_width: usize,
        /// Indices of rows narrower than the widest row seen before them.
        short_rows: Vec<usize>,
    },
}

impl ValidationResult {
    pub fn has_short_rows(&self) -> bool {
        matches!(self, Self::Completed { short_rows, .. } if !short_rows.is_empty())
    }
}

/// Scans every row keeping a running maximum width. A row narrower than the
/// running maximum is reported but never stops the scan.
pub fn validate(table: &[Row], options: &[ValidationOption], target: &str) -> ValidationResult {
    if !options::is_enabled(options, target) {
        info!(option = target, "validation has not been activated");
        return ValidationResult::Skipped;
    }

    let mut max_width = 0;
    let mut short_rows = Vec::new();
    for (index, row) in table.iter().enumerate() {
        if row.len() >= max_width {
            max_width = row.len();
        } else {
            warn!(
                row = index,
                cells = row.len(),
                max_width,
                "row has empty cells"
            );
            short_rows.push(index);
        }
    }

    ValidationResult::Completed {
        max_width,
        short_rows,
    }
}
