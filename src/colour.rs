//! Colouring: the grayscale palette and the iteration count → colour mapping.

use std::ops::Index;

use log::debug;

/// Brightest intensity the gradient approaches; it never reaches it, which keeps escaped points
/// visually separate from the white interior.
const GRADIENT_CEILING: f64 = 128.0;

/// Precomputed intensity for every escape count in `[0, max_iterations)`.
///
/// Intensity grows with the square root of the escape count, so the rapid growth of counts near
/// the boundary of the set becomes a smooth gradient rather than a few bright bands.
///
/// Built once at startup and shared read-only by all render workers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    intensities: Box<[u8]>,
}

impl Palette {
    pub fn build(max_iterations: u32) -> Self {
        let total = max_iterations as f64;
        let intensities: Box<[u8]> = (0..max_iterations)
            .map(|i| ((i as f64 / total).sqrt() * GRADIENT_CEILING) as u8)
            .collect();
        debug!("built palette with {} entries", intensities.len());
        Self { intensities }
    }

    /// The escape-time cutoff this palette was built for.
    pub fn max_iterations(&self) -> u32 {
        self.intensities.len() as u32
    }

    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.intensities
    }
}

impl Index<usize> for Palette {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.intensities[index]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Rgb {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };

    pub fn gray(intensity: u8) -> Self {
        Rgb {
            r: intensity,
            g: intensity,
            b: intensity,
        }
    }
}

/// Colour for a pixel whose evaluation stopped after `iteration_count` iterations.
///
/// Points that never escaped (`iteration_count == max_iterations`) are white. Everything else
/// takes its gray level from the palette. Alpha is the renderer's business.
#[inline]
pub fn colour_of(iteration_count: u32, max_iterations: u32, palette: &Palette) -> Rgb {
    debug_assert_eq!(palette.max_iterations(), max_iterations);
    debug_assert!(iteration_count <= max_iterations);

    if iteration_count == max_iterations {
        return Rgb::WHITE;
    }
    Rgb::gray(palette[iteration_count as usize])
}
