//! Escape-time evaluation of a single pixel.

use crate::{
    pixel::{Complex, Pixel},
    screen,
    viewport::Viewport,
};

/// `|z|²` beyond which an orbit is known to diverge.
const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Map a pixel to the point of the complex plane it samples.
///
/// The plane's imaginary axis points up while pixel rows count down, so `y` is flipped.
#[inline]
pub fn point_of(pixel: Pixel, viewport: &Viewport, frame: screen::Size) -> Complex {
    let size = viewport.size;
    let half = size / 2.0;
    Complex {
        real: pixel.x as f64 * size / frame.width as f64 - half + viewport.centre_x,
        imaginary: (frame.height as f64 - pixel.y as f64) * size / frame.height as f64 - half
            + viewport.centre_y,
    }
}

/// Number of iterations of `z ← z² + c` (starting at `z = 0`) the point `c` survives.
///
/// An orbit that leaves the escape radius on the `n`th iteration returns `n`. Orbits still bounded
/// after `max_iterations` iterations return `max_iterations`; the point is taken to be inside the
/// set.
#[inline]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    for iteration in 1..=max_iterations {
        z = z.square_add(c);
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return iteration;
        }
    }
    max_iterations
}

/// Escape time of the point under `pixel` for a frame of size `frame` showing `viewport`.
#[inline]
pub fn evaluate(
    pixel: Pixel,
    viewport: &Viewport,
    frame: screen::Size,
    max_iterations: u32,
) -> u32 {
    escape_time(point_of(pixel, viewport, frame), max_iterations)
}
