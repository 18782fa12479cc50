use imenh_core::consts::UPLOAD_EXTENSIONS;
use imenh_core::io::input::InputMode;
use imenh_core::render::dimensions_label;

use crate::app::ImEnhApp;
use crate::panels::helpers::{enum_radio, section_header};

pub(super) fn input_section(ui: &mut egui::Ui, app: &mut ImEnhApp) {
    let label = app.ui_state.source.as_ref().map(|s| s.label().to_string());
    section_header(ui, "Input", label.as_deref());
    ui.add_space(4.0);

    let mut mode = app.ui_state.input_mode;
    if enum_radio(ui, &mut mode, InputMode::ALL) {
        app.set_input_mode(mode);
    }

    match mode {
        InputMode::Camera => {
            let available = crate::camera::is_available();
            if ui
                .add_enabled(available, egui::Button::new("Take Snapshot"))
                .clicked()
            {
                app.take_snapshot();
            }
            if !available {
                ui.small("Camera support is not built in");
            }
        }
        InputMode::FileUpload => {
            if ui.button("Open...").clicked() {
                app.open_file_dialog();
            }
            ui.small(format!("Accepted: {}", UPLOAD_EXTENSIONS.join(", ")));
        }
    }

    if let Some((w, h)) = app.ui_state.input_dimensions {
        ui.label(dimensions_label(w, h));
    }

    if mode == InputMode::FileUpload {
        if let Some(ref texture) = app.viewport.input_texture {
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .max_width(ui.available_width())
                    .corner_radius(2.0),
            );
        }
    }
}
