use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{EnhanceError, Result};

/// A single-channel 8-bit image.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayFrame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
}

impl GrayFrame {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Uniform frame filled with `value`.
    pub fn filled(height: usize, width: usize, value: u8) -> Self {
        Self::new(Array2::from_elem((height, width), value))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn from_gray_image(img: &GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(Array2::from_shape_fn(
            (height as usize, width as usize),
            |(row, col)| img.get_pixel(col as u32, row as u32)[0],
        ))
    }

    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Luma([self.data[[y as usize, x as usize]]])
        })
    }
}

/// A three-channel 8-bit image in R, G, B order.
///
/// Every pipeline stage takes a frame by reference and returns a new one,
/// so a frame is never mutated once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorFrame {
    /// Pixel data, row-major, shape = (height, width, 3)
    pub data: Array3<u8>,
}

impl ColorFrame {
    pub fn new(data: Array3<u8>) -> Self {
        debug_assert_eq!(data.dim().2, COLOR_CHANNEL_COUNT);
        Self { data }
    }

    /// Uniform frame where every pixel is `rgb`.
    pub fn filled(height: usize, width: usize, rgb: [u8; 3]) -> Self {
        Self::new(Array3::from_shape_fn(
            (height, width, COLOR_CHANNEL_COUNT),
            |(_, _, c)| rgb[c],
        ))
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// (width, height) in the order image libraries report it.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width() as u32, self.height() as u32)
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }

    /// Take ownership of an `image` RGB buffer without copying pixels.
    pub fn from_rgb_image(img: RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw_rgb(width, height, img.into_raw())
    }

    /// Wrap interleaved RGB bytes, e.g. a camera frame buffer.
    pub fn from_raw_rgb(width: u32, height: u32, raw: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EnhanceError::InvalidDimensions { width, height });
        }
        let data = Array3::from_shape_vec(
            (height as usize, width as usize, COLOR_CHANNEL_COUNT),
            raw,
        )
        .map_err(|_| EnhanceError::InvalidDimensions { width, height })?;
        Ok(Self::new(data))
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let (width, height) = self.dimensions();
        RgbImage::from_fn(width, height, |x, y| {
            Rgb(self.pixel(y as usize, x as usize))
        })
    }
}
