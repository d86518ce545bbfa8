//! CPU Mandelbrot explorer.
//!
//! The library holds everything that doesn't need a window: the escape-time evaluator, the
//! parallel frame renderer, the palette, and the viewport state machine that turns navigation
//! input into new frames. The binary wraps it in a `winit` window and blits each finished frame
//! with `wgpu`.

pub mod colour;
pub mod config;
pub mod controls;
pub mod escape;
pub mod explorer;
pub mod pixel;
pub mod render;
pub mod screen;
pub mod viewport;

pub use colour::Palette;
pub use config::Config;
pub use explorer::Explorer;
pub use viewport::{Navigation, Viewport};
