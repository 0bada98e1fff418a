pub mod app;
pub mod close_button;
pub mod scale_indicator;
pub mod zoom_controls;
pub mod zoom_viewer;

pub use app::App;
