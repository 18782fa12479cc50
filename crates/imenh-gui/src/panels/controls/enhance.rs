use imenh_core::consts::{CONTRAST_RANGE, OFFSET_RANGE};

use crate::app::ImEnhApp;
use crate::panels::helpers::section_header;

pub(super) fn enhance_section(ui: &mut egui::Ui, app: &mut ImEnhApp) {
    section_header(ui, "Image Enhancement", None);
    ui.add_space(4.0);

    let (cmin, cmax) = CONTRAST_RANGE;
    let (omin, omax) = OFFSET_RANGE;
    let params = &mut app.params.enhance;
    let mut changed = false;

    changed |= ui
        .add(
            egui::Slider::new(&mut params.contrast, cmin..=cmax)
                .step_by(0.1)
                .fixed_decimals(1)
                .text("Contrast"),
        )
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut params.brightness, omin..=omax).text("Brightness"))
        .changed();
    changed |= ui
        .add_enabled(
            !params.enhance_grayscale,
            egui::Slider::new(&mut params.color_balance, omin..=omax).text("Color Balance"),
        )
        .on_disabled_hover_text("No effect in grayscale mode")
        .changed();

    ui.add_space(4.0);
    changed |= ui
        .checkbox(&mut params.enhance_grayscale, "Enhance Grayscale")
        .changed();
    changed |= ui.checkbox(&mut params.cartoonize, "Cartoonize").changed();

    if changed {
        app.mark_dirty();
    }
}
