pub mod coordinate_reader;

pub use coordinate_reader::CoordinateReader;
