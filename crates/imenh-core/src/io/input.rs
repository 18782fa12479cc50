use std::path::Path;

use crate::consts::UPLOAD_EXTENSIONS;
use crate::error::{EnhanceError, Result};
use crate::frame::ColorFrame;

use super::codec::{decode, read_dimensions};

/// Where the input image came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Camera,
    FileUpload,
}

impl InputMode {
    pub const ALL: &[Self] = &[Self::Camera, Self::FileUpload];
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Camera => write!(f, "Camera"),
            Self::FileUpload => write!(f, "File upload"),
        }
    }
}

/// Raw, still-encoded image bytes plus their origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Camera { bytes: Vec<u8> },
    Upload { file_name: String, bytes: Vec<u8> },
}

impl InputSource {
    /// A camera snapshot. No file name, so no extension check.
    pub fn camera(bytes: Vec<u8>) -> Self {
        Self::Camera { bytes }
    }

    /// An uploaded file; only `.png` and `.jpg` names are accepted.
    pub fn upload(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        check_extension(&file_name)?;
        Ok(Self::Upload { file_name, bytes })
    }

    /// Read a file from disk as an upload.
    pub fn open(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        check_extension(&file_name)?;
        let bytes = std::fs::read(path)?;
        Ok(Self::Upload { file_name, bytes })
    }

    pub fn mode(&self) -> InputMode {
        match self {
            Self::Camera { .. } => InputMode::Camera,
            Self::Upload { .. } => InputMode::FileUpload,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Camera { bytes } | Self::Upload { bytes, .. } => bytes,
        }
    }

    /// Name shown to the user: the file name, or "camera snapshot".
    pub fn label(&self) -> &str {
        match self {
            Self::Camera { .. } => "camera snapshot",
            Self::Upload { file_name, .. } => file_name,
        }
    }

    pub fn decode(&self) -> Result<ColorFrame> {
        decode(self.bytes())
    }

    /// Upright (width, height) without decoding the pixels.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        read_dimensions(self.bytes())
    }
}

/// Accept only the upload extensions, compared case-insensitively.
pub fn check_extension(file_name: &str) -> Result<()> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext {
        Some(ref e) if UPLOAD_EXTENSIONS.contains(&e.as_str()) => Ok(()),
        _ => Err(EnhanceError::UnsupportedFormat(file_name.to_string())),
    }
}
