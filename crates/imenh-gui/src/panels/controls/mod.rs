mod blur;
mod downloads;
mod encode;
mod enhance;
mod input;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::ImEnhApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                input::input_section(ui, app);
                ui.separator();
                blur::blur_section(ui, app);
                ui.separator();
                enhance::enhance_section(ui, app);
                ui.separator();
                encode::encode_section(ui, app);
                ui.separator();
                downloads::downloads_section(ui, app);
            });
        });
}
