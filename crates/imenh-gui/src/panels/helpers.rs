/// Show one radio button per enum value. Returns `true` if the value changed.
pub(crate) fn enum_radio<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    current: &mut T,
    options: &[T],
) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        for &choice in options {
            if ui.radio_value(current, choice, choice.to_string()).changed() {
                changed = true;
            }
        }
    });
    changed
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    egui::Frame::NONE.inner_margin(4.0).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(label);
            if let Some(s) = status {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(s);
                });
            }
        });
    });
}
