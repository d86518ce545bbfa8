//! Parallel frame rendering.

use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    colour::{colour_of, Palette},
    escape,
    pixel::Pixel,
    screen::{self, BYTES_PER_PIXEL},
    viewport::Viewport,
};

/// Bands handed out per worker thread. Rows through the interior of the set are far more
/// expensive than rows outside it, so give the scheduler more than one band per thread.
const BANDS_PER_THREAD: usize = 4;

/// Renders frames into a single RGBA buffer that is reused for every frame.
pub struct Renderer {
    frame: screen::Size,
    max_iterations: u32,
    palette: Arc<Palette>,
    rows_per_band: usize,
    pixels: Vec<u8>,
}

impl Renderer {
    /// `frame` must be non-empty and `palette` built for `max_iterations`; [`crate::Config`]
    /// guarantees both.
    pub fn new(frame: screen::Size, max_iterations: u32, palette: Arc<Palette>) -> Self {
        assert!(frame.width > 0 && frame.height > 0, "empty frame {:?}", frame);
        assert_eq!(palette.max_iterations(), max_iterations);

        let bands = num_cpus::get() * BANDS_PER_THREAD;
        let rows_per_band = (frame.height as usize + bands - 1) / bands;
        debug!(
            "rendering {}x{} frames in bands of {} rows",
            frame.width, frame.height, rows_per_band
        );

        Self {
            frame,
            max_iterations,
            palette,
            rows_per_band: rows_per_band.max(1),
            pixels: vec![0; frame.byte_len()],
        }
    }

    pub fn frame(&self) -> screen::Size {
        self.frame
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// The most recently rendered frame.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Render `viewport` and return the finished frame.
    ///
    /// Each band of rows is an exclusive `&mut` slice of the buffer, so workers never share
    /// bytes. Returns only once every pixel has been written.
    pub fn render(&mut self, viewport: Viewport) -> &[u8] {
        trace!("begin render {:?}", viewport);

        let frame = self.frame;
        let max_iterations = self.max_iterations;
        let palette: &Palette = &self.palette;
        let rows_per_band = self.rows_per_band;
        let row_len = frame.row_len();

        self.pixels
            .par_chunks_mut(row_len * rows_per_band)
            .enumerate()
            .for_each(|(band_index, band)| {
                let first_row = band_index * rows_per_band;
                for (row_offset, row) in band.chunks_exact_mut(row_len).enumerate() {
                    let y = (first_row + row_offset) as u32;
                    for (x, bytes) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                        let pixel = Pixel::new(x as u32, y);
                        let iterations = escape::evaluate(pixel, &viewport, frame, max_iterations);
                        let colour = colour_of(iterations, max_iterations, palette);
                        bytes.copy_from_slice(&[colour.r, colour.g, colour.b, 0xff]);
                    }
                }
            });

        trace!("end render");
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(width: u32, height: u32, max_iterations: u32) -> Renderer {
        Renderer::new(
            screen::Size::new(width, height),
            max_iterations,
            Arc::new(Palette::build(max_iterations)),
        )
    }

    fn offset(x: usize, y: usize, width: usize) -> usize {
        4 * (x + y * width)
    }

    #[test]
    fn buffer_has_four_bytes_per_pixel() {
        let mut renderer = renderer(7, 3, 50);
        assert_eq!(renderer.render(Viewport::default()).len(), 7 * 3 * 4);
    }

    #[test]
    fn five_by_five_frame() {
        let mut renderer = renderer(5, 5, 140);
        let palette = Palette::build(140);
        let pixels = renderer.render(Viewport::default());

        let centre = offset(2, 2, 5);
        assert_eq!(&pixels[centre..centre + 4], &[0xff, 0xff, 0xff, 0xff]);

        let gray = palette[1];
        assert_eq!(&pixels[0..4], &[gray, gray, gray, 0xff]);
    }

    #[test]
    fn every_pixel_matches_sequential_evaluation() {
        let (width, height, max_iterations) = (37, 23, 200);
        let viewport = Viewport::new(-0.75, 0.1, 2.5);
        let palette = Palette::build(max_iterations);
        let mut renderer = renderer(width, height, max_iterations);
        let pixels = renderer.render(viewport).to_vec();

        let frame = screen::Size::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let count = escape::evaluate(Pixel::new(x, y), &viewport, frame, max_iterations);
                let colour = colour_of(count, max_iterations, &palette);
                let at = offset(x as usize, y as usize, width as usize);
                assert_eq!(
                    &pixels[at..at + 4],
                    &[colour.r, colour.g, colour.b, 0xff],
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let viewport = Viewport::new(-0.1, 0.65, 0.5);
        let mut renderer = renderer(64, 64, 300);
        let first = renderer.render(viewport).to_vec();
        let second = renderer.render(viewport).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn alpha_is_always_opaque() {
        let mut renderer = renderer(31, 17, 100);
        let pixels = renderer.render(Viewport::new(-0.5, 0.0, 3.0));
        assert!(pixels.chunks_exact(4).all(|pixel| pixel[3] == 0xff));
    }

    #[test]
    fn new_frame_overwrites_every_byte() {
        let first = Viewport::default();
        let second = Viewport::new(-1.25, 0.2, 0.3);

        let mut reused = renderer(48, 40, 150);
        let before = reused.render(first).to_vec();
        let after = reused.render(second).to_vec();
        assert_ne!(before, after);

        let mut fresh = renderer(48, 40, 150);
        assert_eq!(after, fresh.render(second));
    }

    #[test]
    fn frames_taller_than_the_band_count() {
        let mut renderer = renderer(3, 1_001, 20);
        let pixels = renderer.render(Viewport::default()).to_vec();
        assert_eq!(pixels.len(), 3 * 1_001 * 4);
        assert!(pixels.chunks_exact(4).all(|pixel| pixel[3] == 0xff));
        assert_eq!(renderer.pixels(), &pixels[..]);
    }
}
