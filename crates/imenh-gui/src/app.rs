use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use imenh_core::frame::ColorFrame;
use imenh_core::io::codec::decode;
use imenh_core::io::input::{InputMode, InputSource};
use imenh_core::pipeline::config::EnhanceParams;
use imenh_core::render::{dimensions_label, render};
use tracing::{info, warn};

use crate::convert::frame_to_color_image;
use crate::panels;
use crate::states::{ParamsState, UIState, ViewportState};

/// Which of the two downloads to save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadKind {
    Processed,
    Original,
}

#[derive(Default)]
pub struct ImEnhApp {
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub params: ParamsState,
    pub show_about: bool,
}

impl ImEnhApp {
    /// Any widget change that affects the output calls this.
    pub fn mark_dirty(&mut self) {
        self.ui_state.render_dirty = true;
    }

    pub fn log_error(&mut self, err: &anyhow::Error) {
        warn!("{err:#}");
        self.ui_state.add_log(format!("ERROR: {err:#}"));
    }

    /// Show a file dialog and load the chosen image as an upload.
    pub fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg"])
            .pick_file()
        {
            if let Err(e) = self.open_file(&path) {
                self.log_error(&e);
            }
        }
    }

    fn open_file(&mut self, path: &Path) -> Result<()> {
        let source = InputSource::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        info!(file = source.label(), bytes = source.bytes().len(), "Opened upload");
        self.ui_state.add_log(format!("Opened: {}", path.display()));
        self.ui_state.set_source(source);
        Ok(())
    }

    pub fn take_snapshot(&mut self) {
        match crate::camera::capture_snapshot() {
            Ok(bytes) => {
                self.ui_state.add_log("Camera snapshot taken".into());
                self.ui_state.set_source(InputSource::camera(bytes));
            }
            Err(e) => self.log_error(&e),
        }
    }

    /// Switching away from the current source's mode drops that source.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.ui_state.input_mode = mode;
        if self.ui_state.source.as_ref().is_some_and(|s| s.mode() != mode) {
            self.ui_state.source = None;
            self.ui_state.input_dimensions = None;
            self.ui_state.output = None;
            self.viewport.texture = None;
            self.viewport.input_texture = None;
            self.viewport.image_size = None;
            self.viewport.viewing_label.clear();
        }
    }

    pub fn reset_defaults(&mut self) {
        self.params = ParamsState::default();
        self.mark_dirty();
        self.ui_state.add_log("Parameters reset to defaults".into());
    }

    /// Re-run decode, enhance and encode when something changed.
    fn rerender(&mut self, ctx: &egui::Context) {
        if !self.ui_state.render_dirty {
            return;
        }
        self.ui_state.render_dirty = false;
        let Some(source) = self.ui_state.source.as_ref() else {
            return;
        };

        let started = Instant::now();
        let result = render(
            source,
            &self.params.enhance,
            self.params.encode_settings(),
        )
        .with_context(|| format!("Failed to process {}", source.label()))
        .and_then(|output| {
            let shown = decode(&output.processed.bytes).context("Failed to decode processed image")?;
            Ok((output, shown))
        });

        match result {
            Ok((output, shown)) => {
                self.ui_state.last_render = Some(started.elapsed());
                self.update_input_texture(ctx, &output.input);
                self.update_viewport_texture(ctx, &shown, &viewing_label(&output));
                self.ui_state.output = Some(output);
            }
            Err(e) => self.log_error(&e),
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context, frame: &ColorFrame, label: &str) {
        let image = frame_to_color_image(frame);
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = label.to_string();
    }

    fn update_input_texture(&mut self, ctx: &egui::Context, frame: &ColorFrame) {
        if self.ui_state.input_mode != InputMode::FileUpload {
            self.viewport.input_texture = None;
            return;
        }
        let image = frame_to_color_image(frame);
        self.viewport.input_texture =
            Some(ctx.load_texture("input", image, egui::TextureOptions::LINEAR));
    }

    /// Save one of the downloads through a native save dialog.
    pub fn save_download(&mut self, kind: DownloadKind) {
        let download = match (kind, self.ui_state.output.as_ref()) {
            (DownloadKind::Processed, Some(output)) => output.processed_download.clone(),
            (DownloadKind::Original, Some(output)) => output.original_download.clone(),
            (_, None) => {
                self.ui_state.add_log("Nothing to save yet".into());
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&download.file_name)
            .save_file()
        else {
            return;
        };

        match std::fs::write(&path, &download.bytes)
            .with_context(|| format!("Failed to write {}", path.display()))
        {
            Ok(()) => {
                info!(path = %path.display(), bytes = download.bytes.len(), "Saved download");
                self.ui_state.add_log(format!("Saved: {}", path.display()));
            }
            Err(e) => self.log_error(&e),
        }
    }

    pub fn import_params(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        match load_params(&path) {
            Ok(params) => {
                self.params.enhance = params;
                self.mark_dirty();
                self.ui_state.add_log(format!("Imported parameters: {}", path.display()));
            }
            Err(e) => self.log_error(&e),
        }
    }

    pub fn export_params(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("imenh_params.toml")
            .save_file()
        else {
            return;
        };
        let result = toml::to_string_pretty(&self.params.enhance)
            .context("Failed to serialize parameters")
            .and_then(|content| {
                std::fs::write(&path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))
            });
        match result {
            Ok(()) => self
                .ui_state
                .add_log(format!("Exported parameters: {}", path.display())),
            Err(e) => self.log_error(&e),
        }
    }
}

impl eframe::App for ImEnhApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);

        self.rerender(ctx);

        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Image Enhancer")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Image Enhancer");
                        ui.label("Blur, tone and cartoonize a single image");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn load_params(path: &Path) -> Result<EnhanceParams> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let params: EnhanceParams = toml::from_str(&content)
        .with_context(|| format!("Invalid parameters in {}", path.display()))?;
    params.validate()?;
    Ok(params)
}

fn viewing_label(output: &imenh_core::render::RenderOutput) -> String {
    let (w, h) = output.dimensions();
    match output.processed.quality {
        Some(q) => format!("Processed {} {} q{q}", dimensions_label(w, h), output.processed.format),
        None => format!("Processed {} {}", dimensions_label(w, h), output.processed.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imenh_core::frame::ColorFrame;
    use imenh_core::io::codec::{encode, EncodeSettings};

    fn source() -> InputSource {
        let frame = ColorFrame::filled(4, 6, [90, 120, 150]);
        let bytes = encode(&frame, EncodeSettings::Png).unwrap().bytes;
        InputSource::upload("test.png", bytes).unwrap()
    }

    #[test]
    fn viewing_label_mentions_format_and_quality() {
        let output = render(&source(), &EnhanceParams::default(), EncodeSettings::Jpeg { quality: 70 }).unwrap();
        assert_eq!(viewing_label(&output), "Processed (6x4) JPEG q70");

        let output = render(&source(), &EnhanceParams::default(), EncodeSettings::Png).unwrap();
        assert_eq!(viewing_label(&output), "Processed (6x4) PNG");
    }

    #[test]
    fn switching_mode_drops_other_source() {
        let mut app = ImEnhApp::default();
        app.ui_state.set_source(source());
        assert_eq!(app.ui_state.input_mode, InputMode::FileUpload);
        assert!(app.ui_state.render_dirty);

        app.set_input_mode(InputMode::FileUpload);
        assert!(app.ui_state.source.is_some());

        app.set_input_mode(InputMode::Camera);
        assert!(app.ui_state.source.is_none());
        assert!(app.ui_state.input_dimensions.is_none());
        assert!(app.ui_state.output.is_none());
    }

    #[test]
    fn input_dimensions_known_before_render() {
        let mut app = ImEnhApp::default();
        app.ui_state.set_source(source());
        assert!(app.ui_state.output.is_none());
        assert_eq!(app.ui_state.input_dimensions, Some((6, 4)));
    }

    #[test]
    fn undecodable_source_has_no_dimensions() {
        let mut app = ImEnhApp::default();
        app.ui_state.set_source(InputSource::camera(vec![0, 1, 2]));
        assert!(app.ui_state.source.is_some());
        assert!(app.ui_state.input_dimensions.is_none());
    }
}
