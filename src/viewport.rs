//! The visible region of the complex plane and the navigation transitions that move it.

use log::debug;

/// Fraction of the viewport size moved by one pan step.
const PAN_STEP: f64 = 0.05;

const ZOOM_IN_FACTOR: f64 = 9.0 / 10.0;
const ZOOM_OUT_FACTOR: f64 = 10.0 / 9.0;

/// A square region of the complex plane: its centre and its edge length.
///
/// `Copy` on purpose: a render always works from its own snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub centre_x: f64,
    pub centre_y: f64,
    /// Edge length in plane units. Always strictly positive.
    pub size: f64,
}

impl Viewport {
    /// Shows the whole Mandelbrot set.
    pub const INITIAL: Self = Viewport {
        centre_x: 0.0,
        centre_y: 0.0,
        size: 4.0,
    };

    pub fn new(centre_x: f64, centre_y: f64, size: f64) -> Self {
        Self {
            centre_x,
            centre_y,
            size,
        }
    }

    /// The viewport after one pan step. Steps scale with `size`, so panning looks equally fast at
    /// every zoom level.
    pub fn pan(self, pan: Pan) -> Self {
        let step = PAN_STEP * self.size;
        let (dx, dy) = match pan {
            Pan::Up => (0.0, step),
            Pan::Down => (0.0, -step),
            Pan::Right => (step, 0.0),
            Pan::Left => (-step, 0.0),
        };
        Self {
            centre_x: self.centre_x + dx,
            centre_y: self.centre_y + dy,
            ..self
        }
    }

    /// The viewport after one zoom step. Nothing bounds `size`; deep enough zooms run into the
    /// precision of `f64`.
    pub fn zoom(self, zoom: Zoom) -> Self {
        let factor = match zoom {
            Zoom::In => ZOOM_IN_FACTOR,
            Zoom::Out => ZOOM_OUT_FACTOR,
        };
        Self {
            size: self.size * factor,
            ..self
        }
    }

    /// Apply at most one pan and then at most one zoom.
    pub fn apply(self, navigation: Navigation) -> Self {
        let mut next = self;
        if let Some(pan) = navigation.pan {
            next = next.pan(pan);
        }
        if let Some(zoom) = navigation.zoom {
            next = next.zoom(zoom);
        }
        if next != self {
            debug!("{:?} moved viewport to {:?}", navigation, next);
        }
        next
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pan {
    Up,
    Down,
    Right,
    Left,
}

impl Pan {
    /// When several pan directions are pressed in one update cycle only the first of these
    /// applies.
    pub const PRECEDENCE: [Pan; 4] = [Pan::Up, Pan::Down, Pan::Right, Pan::Left];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zoom {
    In,
    Out,
}

impl Zoom {
    pub const PRECEDENCE: [Zoom; 2] = [Zoom::In, Zoom::Out];
}

/// A single navigation input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Pan(Pan),
    Zoom(Zoom),
}

/// The transitions of one update cycle: at most one pan and at most one zoom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    pub pan: Option<Pan>,
    pub zoom: Option<Zoom>,
}

impl Navigation {
    pub const NONE: Self = Navigation {
        pan: None,
        zoom: None,
    };

    /// Resolve the commands pressed during one cycle. The pan is the first pressed direction in
    /// `Pan::PRECEDENCE`, the zoom the first in `Zoom::PRECEDENCE`; the rest are dropped.
    pub fn resolve(pressed: impl Fn(Command) -> bool) -> Self {
        Self {
            pan: Pan::PRECEDENCE
                .into_iter()
                .find(|&pan| pressed(Command::Pan(pan))),
            zoom: Zoom::PRECEDENCE
                .into_iter()
                .find(|&zoom| pressed(Command::Zoom(zoom))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pan.is_none() && self.zoom.is_none()
    }
}
