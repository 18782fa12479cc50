mod params;
mod ui;
mod viewport;

pub use params::ParamsState;
pub use ui::UIState;
pub use viewport::ViewportState;
