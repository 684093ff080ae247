use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::CollectorConfig;
use crate::utils::constants::{
    DEFAULT_BASE_PATH, DEFAULT_END_ROW, DEFAULT_LATITUDE_COLUMN, DEFAULT_LONGITUDE_COLUMN,
    DEFAULT_REQUEST_DELAY_MS, DEFAULT_START_ROW, STREET_VIEW_ENDPOINT,
};

#[derive(Parser, Debug)]
#[command(name = "svi-collector")]
#[command(about = "Street view image downloader")]
#[command(version)]
pub struct Cli {
    #[arg(short = 'k', long, alias = "api_key", help = "Street view API key")]
    pub api_key: String,

    #[arg(
        short = 'c',
        long,
        aliases = ["csv", "csv_file_path"],
        help = "CSV file containing latitude and longitude columns"
    )]
    pub csv_file_path: PathBuf,

    #[arg(
        short = 'p',
        long,
        alias = "project_area",
        help = "Project area name (e.g., NYC or LA)"
    )]
    pub project_area: String,

    #[arg(
        short = 'b',
        long,
        alias = "base_path",
        default_value = DEFAULT_BASE_PATH,
        help = "Base path for saving images and logs [empty: StreetView_{project_area}/data]"
    )]
    pub base_path: String,

    #[arg(short = 's', long, alias = "start_row", default_value_t = DEFAULT_START_ROW, help = "First row to process")]
    pub start_row: usize,

    #[arg(short = 'e', long, alias = "end_row", default_value_t = DEFAULT_END_ROW, help = "Last row to process (inclusive)")]
    pub end_row: usize,

    #[arg(short = 'v', long, help = "Preview each point's images before stitching")]
    pub visualize: bool,

    #[arg(long, default_value = DEFAULT_LATITUDE_COLUMN, help = "Name of the latitude column")]
    pub lat_column: String,

    #[arg(long, default_value = DEFAULT_LONGITUDE_COLUMN, help = "Name of the longitude column")]
    pub lon_column: String,

    #[arg(
        long,
        default_value_t = DEFAULT_REQUEST_DELAY_MS,
        help = "Milliseconds to wait between requests"
    )]
    pub delay_ms: u64,

    #[arg(long, hide = true, default_value = STREET_VIEW_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short = 'q', long, help = "Hide the progress bar and informational output")]
    pub quiet: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn to_config(&self) -> CollectorConfig {
        CollectorConfig::new(self.api_key.clone(), self.project_area.clone())
            .with_base_path(&self.base_path)
            .with_endpoint(self.endpoint.clone())
            .with_row_range(self.start_row, self.end_row)
            .with_visualize(self.visualize)
            .with_request_delay(Duration::from_millis(self.delay_ms))
            .with_columns(self.lat_column.clone(), self.lon_column.clone())
    }
}
