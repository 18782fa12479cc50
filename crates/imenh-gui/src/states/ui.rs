use std::time::Duration;

use imenh_core::io::input::{InputMode, InputSource};
use imenh_core::render::RenderOutput;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub input_mode: InputMode,
    pub source: Option<InputSource>,
    /// Upright (width, height) of `source`, read when it is set.
    pub input_dimensions: Option<(u32, u32)>,

    /// Result of the last successful render.
    pub output: Option<RenderOutput>,
    pub last_render: Option<Duration>,

    /// Inputs or parameters changed since the last render.
    pub render_dirty: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Replace the input and drop everything derived from the old one.
    pub fn set_source(&mut self, source: InputSource) {
        self.input_mode = source.mode();
        self.input_dimensions = match source.dimensions() {
            Ok(dims) => Some(dims),
            Err(e) => {
                tracing::warn!("Failed to read input dimensions: {e}");
                None
            }
        };
        self.source = Some(source);
        self.output = None;
        self.render_dirty = true;
    }
}
