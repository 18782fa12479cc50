use serde::{Deserialize, Serialize};

use crate::consts::{CONTRAST_RANGE, DEFAULT_BLUR_KERNEL_SIZE, KERNEL_SIZE_RANGE, OFFSET_RANGE};
use crate::error::{EnhanceError, Result};

/// Optional smoothing applied before the tone stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurType {
    #[default]
    None,
    Averaging,
    Bilateral,
}

impl BlurType {
    pub const ALL: &[Self] = &[Self::None, Self::Averaging, Self::Bilateral];
}

impl std::fmt::Display for BlurType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Averaging => write!(f, "Averaging"),
            Self::Bilateral => write!(f, "Bilateral"),
        }
    }
}

/// Every knob of one `enhance` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceParams {
    /// Multiplier on luminance (0.1..=3.0).
    pub contrast: f32,
    /// Added to luminance (-100..=100).
    pub brightness: i32,
    /// Added to both chroma channels (-100..=100). Ignored in grayscale mode.
    pub color_balance: i32,
    pub blur: BlurType,
    /// Box side or bilateral diameter (1..=100). Unused when `blur` is `None`.
    pub blur_kernel_size: u32,
    pub enhance_grayscale: bool,
    pub cartoonize: bool,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            brightness: 0,
            color_balance: 0,
            blur: BlurType::None,
            blur_kernel_size: DEFAULT_BLUR_KERNEL_SIZE,
            enhance_grayscale: false,
            cartoonize: false,
        }
    }
}

impl EnhanceParams {
    /// Reject values outside the ranges the UI sliders allow.
    ///
    /// `enhance` never calls this; it is for values that arrive from config
    /// files or the command line.
    pub fn validate(&self) -> Result<()> {
        let (cmin, cmax) = CONTRAST_RANGE;
        if !self.contrast.is_finite() || !(cmin..=cmax).contains(&self.contrast) {
            return Err(EnhanceError::InvalidParameter {
                name: "contrast",
                value: self.contrast.to_string(),
                allowed: "0.1..=3.0",
            });
        }
        let (omin, omax) = OFFSET_RANGE;
        for (name, value) in [
            ("brightness", self.brightness),
            ("color_balance", self.color_balance),
        ] {
            if !(omin..=omax).contains(&value) {
                return Err(EnhanceError::InvalidParameter {
                    name,
                    value: value.to_string(),
                    allowed: "-100..=100",
                });
            }
        }
        let (kmin, kmax) = KERNEL_SIZE_RANGE;
        if !(kmin..=kmax).contains(&self.blur_kernel_size) {
            return Err(EnhanceError::InvalidParameter {
                name: "blur_kernel_size",
                value: self.blur_kernel_size.to_string(),
                allowed: "1..=100",
            });
        }
        Ok(())
    }
}
