pub mod canvas;
pub mod secondary;
pub mod smoothing;
pub mod xvg;

#[cfg(feature = "python")]
pub mod python_bindings;

// Re-export commonly used types and traits
pub use canvas::{Canvas, Color, Rect, ShapeBuffer};
pub use secondary::{draw_ss, read_ss, SsCode, DEFAULT_HEIGHT, DEFAULT_YPOS};
pub use smoothing::{moving_average, save_smoothed_to_csv, SmoothedPoint, DEFAULT_WINDOW};
pub use xvg::read_xvg;
