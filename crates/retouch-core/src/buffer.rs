//! In-memory pixel buffer passed between pipeline stages.
//!
//! Samples are unsigned 8-bit, row-major, with the channel order R,G,B held
//! consistent through every operation that splits or merges channels. Every
//! transform returns a new buffer; the original upload is never mutated, so a
//! failed edit can never lose the source image.

/// Channel layout of an [`ImageBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Three samples per pixel in R,G,B order.
    Rgb,
    /// One luma sample per pixel (grayscale output).
    Luma,
}

impl Channels {
    /// Samples per pixel for this layout.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Luma => 1,
        }
    }
}

/// A decoded image held as raw 8-bit samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of `pixels`.
    pub channels: Channels,
    /// Sample data, length width * height * channels.count().
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new buffer with the given layout and sample data.
    pub fn new(width: u32, height: u32, channels: Channels, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * channels.count(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Create an RGB buffer.
    pub fn new_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::new(width, height, Channels::Rgb, pixels)
    }

    /// Create a single-channel buffer.
    pub fn new_luma(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::new(width, height, Channels::Luma, pixels)
    }

    /// Create a buffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new_rgb(width, height, img.into_raw())
    }

    /// Convert to an image::RgbImage. Returns `None` for `Luma` buffers.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        if self.channels != Channels::Rgb {
            return None;
        }
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Presentation transform to the canonical display order.
    ///
    /// `Luma` results (the grayscale effect) are expanded back to three
    /// identical channels so they can be shown and downloaded like any other
    /// result; `Rgb` buffers pass through unchanged. This is not a pipeline
    /// stage.
    pub fn to_display_rgb(&self) -> ImageBuffer {
        match self.channels {
            Channels::Rgb => self.clone(),
            Channels::Luma => {
                let mut pixels = Vec::with_capacity(self.pixels.len() * 3);
                for &luma in &self.pixels {
                    pixels.extend_from_slice(&[luma, luma, luma]);
                }
                ImageBuffer::new_rgb(self.width, self.height, pixels)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_counts() {
        assert_eq!(Channels::Rgb.count(), 3);
        assert_eq!(Channels::Luma.count(), 1);
    }

    #[test]
    fn test_buffer_creation() {
        let buf = ImageBuffer::new_rgb(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(buf.width, 100);
        assert_eq!(buf.height, 50);
        assert_eq!(buf.pixel_count(), 5000);
        assert_eq!(buf.byte_size(), 15000);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_buffer_empty() {
        let buf = ImageBuffer::new_rgb(0, 0, vec![]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let pixels = vec![255, 0, 0, 0, 255, 0]; // Red, Green
        let buf = ImageBuffer::new_rgb(2, 1, pixels.clone());
        let img = buf.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (2, 1));

        let back = ImageBuffer::from_rgb_image(img);
        assert_eq!(back.pixels, pixels);
    }

    #[test]
    fn test_luma_has_no_rgb_view() {
        let buf = ImageBuffer::new_luma(2, 2, vec![10, 20, 30, 40]);
        assert!(buf.to_rgb_image().is_none());
    }

    #[test]
    fn test_display_rgb_expands_luma() {
        let buf = ImageBuffer::new_luma(2, 1, vec![10, 200]);
        let display = buf.to_display_rgb();
        assert_eq!(display.channels, Channels::Rgb);
        assert_eq!(display.width, 2);
        assert_eq!(display.height, 1);
        assert_eq!(display.pixels, vec![10, 10, 10, 200, 200, 200]);
    }

    #[test]
    fn test_display_rgb_passes_rgb_through() {
        let buf = ImageBuffer::new_rgb(1, 1, vec![1, 2, 3]);
        assert_eq!(buf.to_display_rgb(), buf);
    }
}
