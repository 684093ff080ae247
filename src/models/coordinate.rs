use serde::{Deserialize, Serialize};

use crate::utils::filename::format_coordinate;

/// One input point, identified by its zero-based position among the data rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRow {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
}

impl CoordinateRow {
    pub fn new(index: usize, latitude: f64, longitude: f64) -> Self {
        Self {
            index,
            latitude,
            longitude,
        }
    }

    /// Value of the `location` query parameter
    pub fn location_param(&self) -> String {
        format!(
            "{},{}",
            format_coordinate(self.latitude),
            format_coordinate(self.longitude)
        )
    }
}

/// Rows in the closed range `[start_row, end_row]`.
///
/// A start past the end of `rows` yields nothing, an end past it is clamped.
pub fn select_rows(rows: &[CoordinateRow], start_row: usize, end_row: usize) -> &[CoordinateRow] {
    let start = start_row.min(rows.len());
    let end = end_row.saturating_add(1).min(rows.len());
    if end <= start {
        &[]
    } else {
        &rows[start..end]
    }
}
