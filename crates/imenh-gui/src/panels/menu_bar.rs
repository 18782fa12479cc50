use crate::app::{DownloadKind, ImEnhApp};

pub fn show(ctx: &egui::Context, app: &mut ImEnhApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    app.open_file_dialog();
                }

                if ui
                    .add_enabled(crate::camera::is_available(), egui::Button::new("Take Snapshot"))
                    .clicked()
                {
                    ui.close();
                    app.take_snapshot();
                }

                ui.separator();

                let has_output = app.ui_state.output.is_some();
                if ui
                    .add_enabled(
                        has_output,
                        egui::Button::new("Save Processed...").shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.save_download(DownloadKind::Processed);
                }
                if ui.add_enabled(has_output, egui::Button::new("Save Original...")).clicked() {
                    ui.close();
                    app.save_download(DownloadKind::Original);
                }

                ui.separator();

                if ui.button("Import Parameters...").clicked() {
                    ui.close();
                    app.import_params();
                }

                if ui.button("Export Parameters...").clicked() {
                    ui.close();
                    app.export_params();
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.reset_defaults();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });
    });

    // Keyboard shortcuts (consumed outside menus)
    if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
        app.open_file_dialog();
    }
    if ctx.input_mut(|i| i.consume_shortcut(&save_shortcut)) {
        app.save_download(DownloadKind::Processed);
    }
    if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}
