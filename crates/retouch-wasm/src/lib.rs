//! Retouch WASM - WebAssembly bindings for Retouch
//!
//! This crate exposes the retouch-core functionality to the JavaScript
//! upload/display/download chrome.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `adjustments` - Slider and effect-toggle bindings
//! - `decode` - Upload decoding bindings (JPEG/PNG)
//! - `pipeline` - Full edit pipeline bindings
//! - `encode` - Download encoding bindings (JPEG)
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, render, Adjustments } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const original = decode_image(bytes);
//!
//! const adj = new Adjustments();
//! adj.brightness = 50;
//! const adjusted = render(original, adj);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod encode;
mod pipeline;
mod types;

// Re-export public types
pub use adjustments::Adjustments;
pub use decode::decode_image;
pub use encode::{
    default_quality, download_filename, download_mime_type, encode_image, encode_jpeg,
};
pub use pipeline::{render, render_with_params, to_display_rgb};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
