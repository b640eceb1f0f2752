//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Retouch
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use retouch_core::{Channels, ImageBuffer};
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript.
///
/// Wraps the core pixel buffer and exposes dimensions, channel count, and
/// pixel data to the chrome. Pixel data lives in WASM memory; `pixels()`
/// copies it out as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions, channel count (3 for RGB,
    /// 1 for grayscale), and pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of samples per pixel (3 for RGB, 1 for grayscale)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns pixel data as Uint8Array (a copy out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer handles cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    /// Create a JsImage from a core ImageBuffer.
    pub(crate) fn from_buffer(buf: ImageBuffer) -> Self {
        Self {
            width: buf.width,
            height: buf.height,
            channels: buf.channels.count() as u8,
            pixels: buf.pixels,
        }
    }

    /// Convert back to a core ImageBuffer. Clones the pixel data.
    ///
    /// The constructor accepts whatever JavaScript hands it, so the pixel
    /// length is validated here before the buffer reaches the pipeline's
    /// coordinate-indexed loops. Errors are plain strings; bindings map
    /// them to `JsValue` at the boundary so this stays testable on native
    /// targets.
    pub(crate) fn to_buffer(&self) -> Result<ImageBuffer, String> {
        let channels = match self.channels {
            3 => Channels::Rgb,
            1 => Channels::Luma,
            n => return Err(format!("Unsupported channel count: {}", n)),
        };
        let expected = (self.width as usize) * (self.height as usize) * channels.count();
        if self.pixels.len() != expected {
            return Err(format!(
                "Invalid pixel data: expected {} bytes (width * height * channels), got {}",
                expected,
                self.pixels.len()
            ));
        }
        Ok(ImageBuffer::new(
            self.width,
            self.height,
            channels,
            self.pixels.clone(),
        ))
    }
}
