use imenh_core::consts::KERNEL_SIZE_RANGE;
use imenh_core::pipeline::config::BlurType;

use crate::app::ImEnhApp;
use crate::panels::helpers::{enum_radio, section_header};

pub(super) fn blur_section(ui: &mut egui::Ui, app: &mut ImEnhApp) {
    section_header(ui, "Blur filter", None);
    ui.add_space(4.0);

    ui.small("Blur type");
    if enum_radio(ui, &mut app.params.enhance.blur, BlurType::ALL) {
        app.mark_dirty();
    }

    // Kernel size only matters once a blur is selected.
    if app.params.enhance.blur != BlurType::None {
        let (min, max) = KERNEL_SIZE_RANGE;
        if ui
            .add(
                egui::Slider::new(&mut app.params.enhance.blur_kernel_size, min..=max)
                    .text("Kernel size"),
            )
            .changed()
        {
            app.mark_dirty();
        }
    }
}
