pub mod download_log;

pub use download_log::{DownloadLog, LogRecord};
