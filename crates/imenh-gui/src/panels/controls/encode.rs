use imenh_core::io::codec::EncodeFormat;

use crate::app::ImEnhApp;
use crate::panels::helpers::{enum_radio, section_header};

pub(super) fn encode_section(ui: &mut egui::Ui, app: &mut ImEnhApp) {
    section_header(ui, "Encode", None);
    ui.add_space(4.0);

    if enum_radio(ui, &mut app.params.encode_format, EncodeFormat::ALL) {
        app.mark_dirty();
    }

    if app.params.encode_format == EncodeFormat::Jpeg
        && ui
            .add(egui::Slider::new(&mut app.params.jpeg_quality, 0..=100).text("JPEG quality"))
            .changed()
    {
        app.mark_dirty();
    }
}
