//! Render configuration. Fixed at build time; nothing here is read at runtime.

use thiserror::Error;

use crate::{screen, viewport::Viewport};

pub const WIDTH: u32 = 500;
pub const HEIGHT: u32 = 500;
pub const MAX_ITERATIONS: u32 = 140;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("frame size must be non-zero, got {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },
    #[error("max_iterations must be positive")]
    NoIterations,
    #[error("viewport size must be positive and finite, got {0}")]
    ViewportSize(f64),
    #[error("viewport centre must be finite, got ({0}, {1})")]
    ViewportCentre(f64, f64),
}

/// A validated configuration: non-empty frame, positive iteration cutoff, well-formed
/// initial viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    frame: screen::Size,
    max_iterations: u32,
    initial_viewport: Viewport,
}

impl Config {
    pub fn new(
        frame: screen::Size,
        max_iterations: u32,
        initial_viewport: Viewport,
    ) -> Result<Self, ConfigError> {
        if frame.width == 0 || frame.height == 0 {
            return Err(ConfigError::EmptyFrame {
                width: frame.width,
                height: frame.height,
            });
        }
        if max_iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if !(initial_viewport.size.is_finite() && initial_viewport.size > 0.0) {
            return Err(ConfigError::ViewportSize(initial_viewport.size));
        }
        if !(initial_viewport.centre_x.is_finite() && initial_viewport.centre_y.is_finite()) {
            return Err(ConfigError::ViewportCentre(
                initial_viewport.centre_x,
                initial_viewport.centre_y,
            ));
        }
        Ok(Self {
            frame,
            max_iterations,
            initial_viewport,
        })
    }

    pub fn frame(&self) -> screen::Size {
        self.frame
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn initial_viewport(&self) -> Viewport {
        self.initial_viewport
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame: screen::Size::new(WIDTH, HEIGHT),
            max_iterations: MAX_ITERATIONS,
            initial_viewport: Viewport::INITIAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = Config::default();
        assert_eq!(config.frame(), screen::Size::new(500, 500));
        assert_eq!(config.max_iterations(), 140);
        assert_eq!(config.initial_viewport(), Viewport::new(0.0, 0.0, 4.0));
        assert_eq!(
            Config::new(config.frame(), 140, Viewport::INITIAL),
            Ok(config)
        );
    }

    #[test]
    fn rejects_empty_frames() {
        assert_eq!(
            Config::new(screen::Size::new(0, 10), 140, Viewport::INITIAL),
            Err(ConfigError::EmptyFrame {
                width: 0,
                height: 10
            })
        );
        assert!(Config::new(screen::Size::new(10, 0), 140, Viewport::INITIAL).is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(
            Config::new(screen::Size::new(10, 10), 0, Viewport::INITIAL),
            Err(ConfigError::NoIterations)
        );
    }

    #[test]
    fn rejects_bad_viewports() {
        let frame = screen::Size::new(10, 10);
        for size in [0.0, -1.0, f64::INFINITY] {
            assert_eq!(
                Config::new(frame, 140, Viewport::new(0.0, 0.0, size)),
                Err(ConfigError::ViewportSize(size))
            );
        }
        assert!(matches!(
            Config::new(frame, 140, Viewport::new(f64::NAN, 0.0, 4.0)),
            Err(ConfigError::ViewportCentre(..))
        ));
        assert!(Config::new(frame, 140, Viewport::new(0.0, 0.0, f64::NAN)).is_err());
    }
}
