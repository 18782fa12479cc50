use crate::app::{DownloadKind, ImEnhApp};
use crate::panels::helpers::section_header;

pub(super) fn downloads_section(ui: &mut egui::Ui, app: &mut ImEnhApp) {
    section_header(ui, "Downloads", None);
    ui.add_space(4.0);

    let names = app.ui_state.output.as_ref().map(|o| {
        (
            size_label(&o.processed_download.file_name, o.processed_download.bytes.len()),
            size_label(&o.original_download.file_name, o.original_download.bytes.len()),
        )
    });
    let enabled = names.is_some();

    if ui
        .add_enabled(enabled, egui::Button::new("Download Processed"))
        .clicked()
    {
        app.save_download(DownloadKind::Processed);
    }
    if let Some((ref processed, _)) = names {
        ui.small(processed);
    }

    if ui
        .add_enabled(enabled, egui::Button::new("Download Original"))
        .clicked()
    {
        app.save_download(DownloadKind::Original);
    }
    if let Some((_, ref original)) = names {
        ui.small(original);
    }
}

fn size_label(file_name: &str, bytes: usize) -> String {
    format!("{file_name} ({:.1} KB)", bytes as f64 / 1024.0)
}
