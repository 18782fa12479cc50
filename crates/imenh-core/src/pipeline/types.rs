/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Decoding,
    Blur,
    Tone,
    Cartoonize,
    Encoding,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decoding => write!(f, "Decoding image"),
            Self::Blur => write!(f, "Blurring"),
            Self::Tone => write!(f, "Adjusting tone"),
            Self::Cartoonize => write!(f, "Cartoonizing"),
            Self::Encoding => write!(f, "Encoding output"),
        }
    }
}

/// Progress reporting for a render.
///
/// Implementors can use this to drive spinners, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter {
    /// A new stage has started.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `enhance` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
