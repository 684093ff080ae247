use crate::error::Result;
use crate::models::{Direction, DirectionalRequest};
use crate::utils::filename::{format_coordinate, row_label};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize, Serializer};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// One audit row: (row label, direction, latitude, longitude)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub label: String,
    pub direction: Direction,
    #[serde(serialize_with = "serialize_coordinate")]
    pub latitude: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub longitude: f64,
}

impl LogRecord {
    pub fn from_request(request: &DirectionalRequest) -> Self {
        Self {
            label: row_label(request.row.index),
            direction: request.direction,
            latitude: request.row.latitude,
            longitude: request.row.longitude,
        }
    }
}

fn serialize_coordinate<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_coordinate(*value))
}

/// Append-only CSV audit log without a header row.
///
/// Each append opens the file in append mode and closes it again, so a run that
/// aborts part way keeps every record written before the failure.
pub struct DownloadLog {
    path: PathBuf,
}

impl DownloadLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    /// Read back every record; a log that was never written reads as empty
    pub fn read_records(&self) -> Result<Vec<LogRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }
}
