/// Viewport display state.
pub struct ViewportState {
    /// Processed image, decoded from the encoded bytes.
    pub texture: Option<egui::TextureHandle>,
    /// Input image, shown next to the controls in upload mode.
    pub input_texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    pub viewing_label: String,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            input_texture: None,
            image_size: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            viewing_label: String::new(),
        }
    }
}
