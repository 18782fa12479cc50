//! One full render cycle: decode the input, enhance it, encode the result
//! and the original for download.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::consts::ORIGINAL_FILE_NAME;
use crate::error::Result;
use crate::frame::ColorFrame;
use crate::io::codec::{encode, encode_original, EncodeFormat, EncodeSettings, EncodedOutput};
use crate::io::input::InputSource;
use crate::pipeline::config::EnhanceParams;
use crate::pipeline::{enhance_reported, NoOpReporter, PipelineStage, ProgressReporter};

/// A named byte stream offered for saving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Write into `dir` under the download's file name.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Everything one render produces.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    /// The decoded input, before enhancement.
    pub input: ColorFrame,
    /// The processed image as it will be displayed and downloaded.
    pub processed: EncodedOutput,
    pub processed_download: Download,
    pub original_download: Download,
}

impl RenderOutput {
    /// (width, height) of the input image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.input.dimensions()
    }
}

/// Dimensions caption, e.g. `(640x480)`.
pub fn dimensions_label(width: u32, height: u32) -> String {
    format!("({width}x{height})")
}

/// `processed.png` or `processed.jpg`.
pub fn processed_file_name(format: EncodeFormat) -> String {
    format!("processed.{}", format.extension())
}

/// Run a render cycle with a progress reporter.
pub fn render_reported(
    source: &InputSource,
    params: &EnhanceParams,
    settings: EncodeSettings,
    reporter: &dyn ProgressReporter,
) -> Result<RenderOutput> {
    reporter.begin_stage(PipelineStage::Decoding);
    let input = source.decode()?;
    reporter.finish_stage();

    let (width, height) = input.dimensions();
    info!(source = source.label(), width, height, "Rendering");

    let processed_frame = enhance_reported(&input, params, reporter);

    reporter.begin_stage(PipelineStage::Encoding);
    let processed = encode(&processed_frame, settings)?;
    let original = encode_original(&input)?;
    reporter.finish_stage();

    info!(
        processed_bytes = processed.bytes.len(),
        original_bytes = original.bytes.len(),
        "Render complete"
    );

    Ok(RenderOutput {
        processed_download: Download {
            file_name: processed_file_name(processed.format),
            bytes: processed.bytes.clone(),
        },
        original_download: Download {
            file_name: ORIGINAL_FILE_NAME.to_string(),
            bytes: original.bytes,
        },
        processed,
        input,
    })
}

/// Run a render cycle.
pub fn render(
    source: &InputSource,
    params: &EnhanceParams,
    settings: EncodeSettings,
) -> Result<RenderOutput> {
    render_reported(source, params, settings, &NoOpReporter)
}
