use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectorError>;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("CSV must contain a '{column}' column")]
    MissingColumn { column: String },

    #[error("Invalid coordinate on row {row}: '{value}'")]
    InvalidCoordinate { row: usize, value: String },

    #[error("Cannot build a composite from zero images")]
    EmptyComposite,

    #[error("Configuration error: {0}")]
    Config(String),
}
