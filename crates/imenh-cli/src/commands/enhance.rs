use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use imenh_core::consts::DEFAULT_JPEG_QUALITY;
use imenh_core::io::codec::EncodeSettings;
use imenh_core::io::input::InputSource;
use imenh_core::pipeline::config::{BlurType, EnhanceParams};
use imenh_core::pipeline::{PipelineStage, ProgressReporter};
use imenh_core::render::render_reported;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BlurArg {
    None,
    Averaging,
    Bilateral,
}

impl From<BlurArg> for BlurType {
    fn from(arg: BlurArg) -> Self {
        match arg {
            BlurArg::None => BlurType::None,
            BlurArg::Averaging => BlurType::Averaging,
            BlurArg::Bilateral => BlurType::Bilateral,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EncodeArg {
    Png,
    Jpeg,
}

#[derive(Args)]
pub struct EnhanceArgs {
    /// Input image (.png or .jpg), or `-` to read from stdin
    pub file: PathBuf,

    /// Enhancement parameters (TOML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Blur applied before the tone stage
    #[arg(long, value_enum)]
    pub blur: Option<BlurArg>,

    /// Box side or bilateral diameter (1-100)
    #[arg(long)]
    pub kernel_size: Option<u32>,

    /// Luminance multiplier (0.1-3.0)
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Luminance offset (-100 to 100)
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Chroma offset (-100 to 100), ignored with --grayscale
    #[arg(long, allow_negative_numbers = true)]
    pub color_balance: Option<i32>,

    /// Use the grayscale tone branch
    #[arg(long)]
    pub grayscale: bool,

    /// Apply cartoon stylization after the tone stage
    #[arg(long)]
    pub cartoonize: bool,

    /// Format of the processed image
    #[arg(long, value_enum, default_value = "png")]
    pub encode: EncodeArg,

    /// JPEG quality (0-100)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: u8,

    /// Treat the input as a camera snapshot (skips the extension check)
    #[arg(long)]
    pub snapshot: bool,

    /// Directory that receives processed.<ext> and original.jpg
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Spinner that shows the current pipeline stage.
struct SpinnerReporter {
    bar: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Result<Self> {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        bar.enable_steady_tick(Duration::from_millis(80));
        Ok(Self { bar })
    }
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.bar.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.bar.tick();
    }
}

pub fn run(args: &EnhanceArgs) -> Result<()> {
    let base = match args.config {
        Some(ref path) => load_params(path)?,
        None => EnhanceParams::default(),
    };
    let params = merge_params(base, args);
    params.validate().context("Invalid enhancement parameters")?;
    let settings = encode_settings(args);

    let source = read_source(args)?;
    crate::summary::print_enhance_summary(source.label(), &params, settings, &args.output);

    let reporter = SpinnerReporter::new()?;
    let output = render_reported(&source, &params, settings, &reporter);
    reporter.bar.finish_and_clear();
    let output = output.with_context(|| format!("Failed to process {}", source.label()))?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for download in [&output.processed_download, &output.original_download] {
        let path = download
            .save_to(&args.output)
            .with_context(|| format!("Failed to write {}", download.file_name))?;
        info!(path = %path.display(), bytes = download.bytes.len(), "Saved");
        println!("Saved {}", path.display());
    }

    Ok(())
}

fn load_params(path: &Path) -> Result<EnhanceParams> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let params = toml::from_str(&contents)
        .with_context(|| format!("Invalid parameters in {}", path.display()))?;
    debug!(config = %path.display(), "Loaded parameters");
    Ok(params)
}

/// Flags win over the config file; boolean flags can only switch a stage on.
fn merge_params(mut params: EnhanceParams, args: &EnhanceArgs) -> EnhanceParams {
    if let Some(blur) = args.blur {
        params.blur = blur.into();
    }
    if let Some(size) = args.kernel_size {
        params.blur_kernel_size = size;
    }
    if let Some(contrast) = args.contrast {
        params.contrast = contrast;
    }
    if let Some(brightness) = args.brightness {
        params.brightness = brightness;
    }
    if let Some(balance) = args.color_balance {
        params.color_balance = balance;
    }
    params.enhance_grayscale |= args.grayscale;
    params.cartoonize |= args.cartoonize;
    params
}

fn encode_settings(args: &EnhanceArgs) -> EncodeSettings {
    match args.encode {
        EncodeArg::Png => EncodeSettings::Png,
        EncodeArg::Jpeg => EncodeSettings::Jpeg {
            quality: args.quality,
        },
    }
}

/// Stdin carries no file name, so it is always read as a snapshot.
fn read_source(args: &EnhanceArgs) -> Result<InputSource> {
    if args.file.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read image from stdin")?;
        return Ok(InputSource::camera(bytes));
    }

    if args.snapshot {
        let bytes = std::fs::read(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        Ok(InputSource::camera(bytes))
    } else {
        InputSource::open(&args.file)
            .with_context(|| format!("Failed to open {}", args.file.display()))
    }
}
