pub mod collector;
pub mod compositor;
pub mod viewer;

pub use collector::Collector;
pub use compositor::{concatenate_horizontal, grid_2x2};
pub use viewer::{GridPreview, NoViewer, Viewer};
