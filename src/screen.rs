/// Size of a frame in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Bytes per pixel in a frame buffer (RGBA).
pub const BYTES_PER_PIXEL: usize = 4;

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length of a tightly packed RGBA buffer for this size.
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    pub fn row_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}
