pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{composite_filename, format_coordinate, image_filename, preview_filename, row_label};
pub use progress::ProgressReporter;
