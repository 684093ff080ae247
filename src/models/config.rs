use std::path::{Path, PathBuf};
use std::time::Duration;
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{
    COMPOSITE_DIR, DEFAULT_BASE_PATH, DEFAULT_END_ROW, DEFAULT_LATITUDE_COLUMN,
    DEFAULT_LONGITUDE_COLUMN, DEFAULT_START_ROW, FAILURE_LOG_FILE, IMAGES_DIR, PREVIEW_DIR,
    STREET_VIEW_ENDPOINT, SUCCESS_LOG_FILE,
};

/// Everything the collector needs for one run
#[derive(Debug, Clone, Validate)]
pub struct CollectorConfig {
    #[validate(length(min = 1, message = "API key must not be empty"))]
    pub api_key: String,

    #[validate(length(min = 1, message = "project area must not be empty"))]
    pub project_area: String,

    pub base_path: PathBuf,

    #[validate(url)]
    pub endpoint: String,

    pub start_row: usize,
    pub end_row: usize,
    pub visualize: bool,

    /// Pause between consecutive requests, zero for none
    pub request_delay: Duration,

    #[validate(length(min = 1))]
    pub latitude_column: String,

    #[validate(length(min = 1))]
    pub longitude_column: String,
}

impl CollectorConfig {
    pub fn new(api_key: impl Into<String>, project_area: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_area: project_area.into(),
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            endpoint: STREET_VIEW_ENDPOINT.to_string(),
            start_row: DEFAULT_START_ROW,
            end_row: DEFAULT_END_ROW,
            visualize: false,
            request_delay: Duration::ZERO,
            latitude_column: DEFAULT_LATITUDE_COLUMN.to_string(),
            longitude_column: DEFAULT_LONGITUDE_COLUMN.to_string(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl AsRef<Path>) -> Self {
        self.base_path = resolve_base_path(base_path.as_ref(), &self.project_area);
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_row_range(mut self, start_row: usize, end_row: usize) -> Self {
        self.start_row = start_row;
        self.end_row = end_row;
        self
    }

    pub fn with_visualize(mut self, visualize: bool) -> Self {
        self.visualize = visualize;
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_columns(
        mut self,
        latitude_column: impl Into<String>,
        longitude_column: impl Into<String>,
    ) -> Self {
        self.latitude_column = latitude_column.into();
        self.longitude_column = longitude_column.into();
        self
    }

    /// Validate and hand back the config
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.base_path.join(IMAGES_DIR)
    }

    pub fn composite_dir(&self) -> PathBuf {
        self.base_path.join(COMPOSITE_DIR)
    }

    pub fn preview_dir(&self) -> PathBuf {
        self.base_path.join(PREVIEW_DIR)
    }

    pub fn success_log_path(&self) -> PathBuf {
        self.base_path.join(SUCCESS_LOG_FILE)
    }

    pub fn failure_log_path(&self) -> PathBuf {
        self.base_path.join(FAILURE_LOG_FILE)
    }
}

/// An empty base path falls back to `StreetView_{project_area}/data`
pub fn resolve_base_path(base_path: &Path, project_area: &str) -> PathBuf {
    if base_path.as_os_str().is_empty() {
        PathBuf::from(format!("StreetView_{}", project_area)).join("data")
    } else {
        base_path.to_path_buf()
    }
}
