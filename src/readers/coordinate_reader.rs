use crate::error::{CollectorError, Result};
use crate::models::CoordinateRow;
use crate::utils::constants::{DEFAULT_LATITUDE_COLUMN, DEFAULT_LONGITUDE_COLUMN};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

/// Cell values read as a missing coordinate, matching the usual spreadsheet/pandas NA markers
const MISSING_VALUE_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub struct CoordinateReader {
    latitude_column: String,
    longitude_column: String,
}

impl CoordinateReader {
    pub fn new() -> Self {
        Self {
            latitude_column: DEFAULT_LATITUDE_COLUMN.to_string(),
            longitude_column: DEFAULT_LONGITUDE_COLUMN.to_string(),
        }
    }

    pub fn with_columns(latitude_column: &str, longitude_column: &str) -> Self {
        Self {
            latitude_column: latitude_column.to_string(),
            longitude_column: longitude_column.to_string(),
        }
    }

    /// Read every coordinate pair from a CSV file with a header row
    pub fn read_coordinates(&self, path: &Path) -> Result<Vec<CoordinateRow>> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        self.collect_rows(reader)
    }

    pub fn read_coordinates_from<R: Read>(&self, input: R) -> Result<Vec<CoordinateRow>> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);
        self.collect_rows(reader)
    }

    fn collect_rows<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<Vec<CoordinateRow>> {
        let headers = reader.headers()?.clone();
        let lat_idx = Self::column_index(&headers, &self.latitude_column)?;
        let lon_idx = Self::column_index(&headers, &self.longitude_column)?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let latitude = Self::parse_value(record.get(lat_idx), index)?;
            let longitude = Self::parse_value(record.get(lon_idx), index)?;
            rows.push(CoordinateRow::new(index, latitude, longitude));
        }

        Ok(rows)
    }

    fn column_index(headers: &StringRecord, column: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| CollectorError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Empty, absent and NA cells become NaN; range checks are left to the imagery service
    fn parse_value(raw: Option<&str>, row: usize) -> Result<f64> {
        let trimmed = raw.unwrap_or("").trim();
        if trimmed.is_empty() || MISSING_VALUE_TOKENS.contains(&trimmed) {
            return Ok(f64::NAN);
        }

        trimmed
            .parse::<f64>()
            .map_err(|_| CollectorError::InvalidCoordinate {
                row,
                value: trimmed.to_string(),
            })
    }
}

impl Default for CoordinateReader {
    fn default() -> Self {
        Self::new()
    }
}
