use imenh_core::consts::DEFAULT_JPEG_QUALITY;
use imenh_core::io::codec::{EncodeFormat, EncodeSettings};
use imenh_core::pipeline::config::EnhanceParams;

/// Every widget value that feeds a render.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamsState {
    pub enhance: EnhanceParams,
    pub encode_format: EncodeFormat,
    /// Kept while PNG is selected so switching back restores it.
    pub jpeg_quality: u8,
}

impl Default for ParamsState {
    fn default() -> Self {
        Self {
            enhance: EnhanceParams::default(),
            encode_format: EncodeFormat::Png,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ParamsState {
    pub fn encode_settings(&self) -> EncodeSettings {
        match self.encode_format {
            EncodeFormat::Png => EncodeSettings::Png,
            EncodeFormat::Jpeg => EncodeSettings::Jpeg {
                quality: self.jpeg_quality,
            },
        }
    }
}
