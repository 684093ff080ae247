pub mod config;
pub mod coordinate;
pub mod direction;
pub mod outcome;

pub use config::CollectorConfig;
pub use coordinate::{select_rows, CoordinateRow};
pub use direction::{Direction, DirectionalRequest};
pub use outcome::{FailureReason, FetchFailure, FetchOutcome, FetchedImage, RowReport, RunSummary};
