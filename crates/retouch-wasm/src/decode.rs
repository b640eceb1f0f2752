//! Upload decoding WASM bindings.
//!
//! Exposes the retouch-core decoder to JavaScript: the chrome reads the
//! uploaded file into a `Uint8Array` and hands the bytes here.

use crate::types::JsImage;
use retouch_core::decode;
use wasm_bindgen::prelude::*;

/// Decode uploaded JPEG or PNG bytes into an image.
///
/// The format is guessed from the content and EXIF orientation correction
/// is applied, so the returned pixels are ready for display and editing.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized format or the file is
/// corrupted; no partial image is produced.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsImage::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
