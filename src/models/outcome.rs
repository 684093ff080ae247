use image::DynamicImage;
use std::fmt;
use std::path::PathBuf;

use super::{Direction, DirectionalRequest};

/// Why a directional fetch produced no image
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// The endpoint answered with something other than 200
    HttpStatus(u16),
    /// The request never produced a response
    Network(String),
    /// A 200 response whose body is not a readable image
    Decode(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::HttpStatus(code) => write!(f, "HTTP status {}", code),
            FailureReason::Network(msg) => write!(f, "network error: {}", msg),
            FailureReason::Decode(msg) => write!(f, "undecodable image: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub request: DirectionalRequest,
    pub image: DynamicImage,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub request: DirectionalRequest,
    pub reason: FailureReason,
}

#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success(FetchedImage),
    Failure(FetchFailure),
}

/// What happened to one row
#[derive(Debug, Clone, Default)]
pub struct RowReport {
    pub index: usize,
    pub succeeded: Vec<Direction>,
    pub failed: Vec<FetchFailure>,
    pub composite: Option<PathBuf>,
}

impl RowReport {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.succeeded.is_empty()
    }
}

/// Totals over a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_processed: usize,
    pub images_saved: usize,
    pub failed_requests: usize,
    pub composites_written: usize,
    pub rows_skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &RowReport) {
        self.rows_processed += 1;
        self.images_saved += report.succeeded.len();
        self.failed_requests += report.failed.len();
        if report.composite.is_some() {
            self.composites_written += 1;
        }
        if report.is_skipped() {
            self.rows_skipped += 1;
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Rows processed: {}\nImages saved: {}\nFailed requests: {}\nComposites written: {}\nRows skipped: {}",
            self.rows_processed,
            self.images_saved,
            self.failed_requests,
            self.composites_written,
            self.rows_skipped
        )
    }
}
