use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Unsupported file type: {0} (expected .png or .jpg)")]
    UnsupportedFormat(String),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Invalid parameter {name}: {value} (allowed {allowed})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        allowed: &'static str,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
