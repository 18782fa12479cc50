use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::ORIGINAL_JPEG_QUALITY;
use crate::error::{EnhanceError, Result};
use crate::frame::ColorFrame;

/// Output container format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodeFormat {
    #[default]
    Png,
    Jpeg,
}

impl EncodeFormat {
    pub const ALL: &[Self] = &[Self::Png, Self::Jpeg];

    /// File extension used for downloads.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

impl std::fmt::Display for EncodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// Format plus format-specific options for the processed image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum EncodeSettings {
    #[default]
    Png,
    /// Quality 0..=100; values below the encoder minimum of 1 are raised to 1.
    Jpeg { quality: u8 },
}

impl EncodeSettings {
    pub fn format(&self) -> EncodeFormat {
        match self {
            Self::Png => EncodeFormat::Png,
            Self::Jpeg { .. } => EncodeFormat::Jpeg,
        }
    }

    pub fn quality(&self) -> Option<u8> {
        match self {
            Self::Png => None,
            Self::Jpeg { quality } => Some(*quality),
        }
    }
}

/// Encoded image bytes tagged with how they were produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedOutput {
    pub format: EncodeFormat,
    pub quality: Option<u8>,
    pub bytes: Vec<u8>,
}

/// Decode PNG/JPEG (or anything else `image` can sniff) into an RGB frame.
///
/// The EXIF orientation is applied, so camera photos come out upright. Alpha
/// is dropped and grayscale sources are expanded to three channels.
pub fn decode(bytes: &[u8]) -> Result<ColorFrame> {
    let mut decoder = open_decoder(bytes)?;
    let orientation = decoder.orientation().map_err(EnhanceError::Decode)?;
    let mut img = DynamicImage::from_decoder(decoder).map_err(EnhanceError::Decode)?;
    img.apply_orientation(orientation);
    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        ?orientation,
        "Decoded image"
    );
    ColorFrame::from_rgb_image(img.to_rgb8())
}

/// (width, height) after orientation, read from the header only.
pub fn read_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let mut decoder = open_decoder(bytes)?;
    let (width, height) = decoder.dimensions();
    let orientation = decoder.orientation().map_err(EnhanceError::Decode)?;
    Ok(match orientation {
        Orientation::Rotate90
        | Orientation::Rotate270
        | Orientation::Rotate90FlipH
        | Orientation::Rotate270FlipH => (height, width),
        _ => (width, height),
    })
}

fn open_decoder(bytes: &[u8]) -> Result<impl ImageDecoder + '_> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EnhanceError::Decode(ImageError::IoError(e)))?
        .into_decoder()
        .map_err(EnhanceError::Decode)
}

/// Encode a frame with the given settings.
pub fn encode(frame: &ColorFrame, settings: EncodeSettings) -> Result<EncodedOutput> {
    let rgb = frame.to_rgb_image();
    let mut bytes = Vec::new();

    match settings {
        EncodeSettings::Png => {
            let encoder = PngEncoder::new(&mut bytes);
            rgb.write_with_encoder(encoder)
                .map_err(EnhanceError::Encode)?;
        }
        EncodeSettings::Jpeg { quality } => {
            let encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
            rgb.write_with_encoder(encoder)
                .map_err(EnhanceError::Encode)?;
        }
    }

    debug!(format = %settings.format(), size = bytes.len(), "Encoded image");
    Ok(EncodedOutput {
        format: settings.format(),
        quality: settings.quality(),
        bytes,
    })
}

/// Re-encode the original image as JPEG at the fixed default quality.
pub fn encode_original(frame: &ColorFrame) -> Result<EncodedOutput> {
    encode(
        frame,
        EncodeSettings::Jpeg {
            quality: ORIGINAL_JPEG_QUALITY,
        },
    )
}
