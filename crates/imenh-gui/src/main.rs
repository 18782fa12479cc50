mod app;
mod camera;
mod convert;
mod panels;
mod states;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Image Enhancer"),
        ..Default::default()
    };

    eframe::run_native(
        "ImEnh",
        options,
        Box::new(|_cc| Ok(Box::<app::ImEnhApp>::default())),
    )
}
