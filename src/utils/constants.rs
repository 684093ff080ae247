/// Imagery endpoint and fixed request parameters
pub const STREET_VIEW_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/streetview";
pub const IMAGE_SIZE: &str = "512x512";
pub const FIELD_OF_VIEW: u32 = 90;
pub const PITCH: i32 = 0;

/// Directory names, relative to the base path
pub const IMAGES_DIR: &str = "street_view_images";
pub const COMPOSITE_DIR: &str = "street_view_concate";
pub const PREVIEW_DIR: &str = "street_view_preview";

/// Log file names, relative to the base path
pub const SUCCESS_LOG_FILE: &str = "download_log_add.csv";
pub const FAILURE_LOG_FILE: &str = "download_log_fail.csv";

/// Input column defaults
pub const DEFAULT_LATITUDE_COLUMN: &str = "Latitude";
pub const DEFAULT_LONGITUDE_COLUMN: &str = "Longitude";

/// Processing defaults
pub const DEFAULT_BASE_PATH: &str = ".";
pub const DEFAULT_START_ROW: usize = 0;
pub const DEFAULT_END_ROW: usize = 1;
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 0;
