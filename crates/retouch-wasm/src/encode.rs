//! Download encoding WASM bindings.
//!
//! Exposes JPEG encoding plus the fixed download filename and MIME type the
//! chrome uses to build the download link.

use crate::types::JsImage;
use retouch_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, clamped)
#[wasm_bindgen]
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an adjusted image to JPEG bytes for download.
///
/// Grayscale results are expanded back to RGB first, so the download is
/// always an ordinary color JPEG.
#[wasm_bindgen]
pub fn encode_image(image: &JsImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let buf = image.to_buffer().map_err(|e| JsValue::from_str(&e))?;
    encode::encode_image(&buf, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Fixed filename for the download link
#[wasm_bindgen]
pub fn download_filename() -> String {
    encode::DOWNLOAD_FILENAME.to_string()
}

/// MIME type of the download payload
#[wasm_bindgen]
pub fn download_mime_type() -> String {
    encode::DOWNLOAD_MIME_TYPE.to_string()
}

/// Default JPEG quality for downloads
#[wasm_bindgen]
pub fn default_quality() -> u8 {
    encode::DEFAULT_QUALITY
}
