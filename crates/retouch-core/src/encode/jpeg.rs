//! JPEG encoding for the download path.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::buffer::ImageBuffer;

/// Fixed filename the adjusted image is downloaded under.
pub const DOWNLOAD_FILENAME: &str = "adjusted_image.jpg";

/// MIME type of the download payload.
pub const DOWNLOAD_MIME_TYPE: &str = "image/jpeg";

/// Default JPEG quality for downloads.
pub const DEFAULT_QUALITY: u8 = 90;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, clamped; [`DEFAULT_QUALITY`] for downloads)
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an adjusted buffer to JPEG bytes for download.
///
/// Single-channel results from the grayscale effect are first expanded back
/// to the display RGB layout, so the output is always a color JPEG.
pub fn encode_image(buf: &ImageBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let display = buf.to_display_rgb();
    encode_jpeg(&display.pixels, display.width, display.height, quality)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
