use imenh_core::render::dimensions_label;

use crate::app::ImEnhApp;

pub fn show(ctx: &egui::Context, app: &mut ImEnhApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref output) = app.ui_state.output {
                let (w, h) = output.dimensions();
                ui.label(dimensions_label(w, h));
                ui.separator();
                ui.label(format!(
                    "{}: {:.1} KB",
                    output.processed.format,
                    output.processed.bytes.len() as f64 / 1024.0
                ));
                ui.separator();
            }
            if let Some(elapsed) = app.ui_state.last_render {
                ui.label(format!("Render: {}ms", elapsed.as_millis()));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
        });

        ui.add_space(2.0);
    });
}
